//! Two-state switches with canned messages.

/// A boolean world property with a message for every transition.
///
/// State is private to the crate; gameplay code flips toggles through
/// [`World::turn_on`](crate::World::turn_on) and
/// [`World::turn_off`](crate::World::turn_off) so the transition messages
/// cannot be bypassed.
pub struct Toggle {
    pub(crate) ident: String,
    pub(crate) on: bool,
    pub(crate) turned_on: String,
    pub(crate) turned_off: String,
    pub(crate) already_on: String,
    pub(crate) already_off: String,
}

impl Toggle {
    pub(crate) fn new(
        ident: &str,
        turned_on: &str,
        turned_off: &str,
        already_on: &str,
        already_off: &str,
        initially_on: bool,
    ) -> Self {
        Self {
            ident: ident.to_lowercase(),
            on: initially_on,
            turned_on: turned_on.to_string(),
            turned_off: turned_off.to_string(),
            already_on: already_on.to_string(),
            already_off: already_off.to_string(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The toggle's identifier.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }
}
