//! crates/blackbox/src/feature.rs
//! Feature catalog and the capability query that gates console output.
//!
//! Features are a closed, two-level address: a category wrapping a leaf
//! subfeature. Every leaf carries one boolean toggle in the match tables
//! below; category-level queries delegate to the matching leaf. To see the
//! logs for a feature, flip its arm to `true` locally. Never commit toggle
//! flips - a change to this file should only ever add a new feature, and
//! new features default to `false`.

/// Capability query implemented by every feature catalog.
///
/// The identifier type itself enumerates only valid values, so the query
/// has no failure path and no side effects. Adopting applications with
/// their own feature areas implement this trait on their own closed enum
/// and pass those values straight to [`emit`](crate::emit) or the
/// [`blackbox!`](crate::blackbox) macro.
pub trait LogFeature: Copy {
    /// Whether print statements tagged with this feature reach the console.
    fn should_log(self) -> bool;
}

/// The features logged through the blackbox console gate.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    /// Analytics integrations.
    Analytics(Analytics),
    /// Core application flows.
    Core(Core),
    /// Entitlement and purchase flows.
    Entitlements(Entitlements),
}

/// Subfeatures in analytics allowing for more granular distinction.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Analytics {
    /// Install attribution reporting.
    Attribution,
    /// Playback telemetry.
    Playback,
    /// Session lifecycle events.
    Session,
    /// Anything not covered by a dedicated analytics subfeature.
    Miscellaneous,
}

/// Subfeatures in core allowing for more granular distinction.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Core {
    /// Backend API requests and responses.
    Api,
    /// Deep link routing.
    Deeplink,
    /// Screen navigation.
    Navigation,
    /// First-run onboarding.
    Onboarding,
    /// Media playback engine.
    Player,
    /// Account profile management.
    Profile,
    /// Content refresh cycles.
    Refresh,
    /// Settings screens.
    Settings,
    /// Application start-up sequencing.
    Startup,
    /// Anything not covered by a dedicated core subfeature.
    Miscellaneous,
}

/// Subfeatures in entitlements allowing for more granular distinction.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entitlements {
    /// Purchase flows.
    Purchase,
    /// Restore-purchase flows.
    Restore,
    /// Anything not covered by a dedicated entitlements subfeature.
    Miscellaneous,
}

impl LogFeature for Feature {
    fn should_log(self) -> bool {
        match self {
            Self::Analytics(feature) => feature.should_log(),
            Self::Core(feature) => feature.should_log(),
            Self::Entitlements(feature) => feature.should_log(),
        }
    }
}

impl LogFeature for Analytics {
    fn should_log(self) -> bool {
        match self {
            Self::Attribution => false,
            Self::Playback => false,
            Self::Session => false,
            Self::Miscellaneous => false,
        }
    }
}

impl LogFeature for Core {
    fn should_log(self) -> bool {
        match self {
            Self::Api => false,
            Self::Deeplink => false,
            Self::Navigation => false,
            Self::Onboarding => false,
            Self::Player => false,
            Self::Profile => false,
            Self::Refresh => false,
            Self::Settings => false,
            Self::Startup => false,
            Self::Miscellaneous => false,
        }
    }
}

impl LogFeature for Entitlements {
    fn should_log(self) -> bool {
        match self {
            Self::Purchase => false,
            Self::Restore => false,
            Self::Miscellaneous => false,
        }
    }
}
