use serde::Serialize;

use crate::defaults::DEFAULT_IS_FLUFFY;

/// A panda with a name and a daily sleep quota.
///
/// Whether the panda is fluffy is set at construction and kept internal:
/// there is no public accessor for it. Its inner thoughts are private to
/// this module and only surface through [`Panda::make_noise`]:
///
/// ```compile_fail
/// use zoo_core::Panda;
///
/// let panda = Panda::new("Randall", 20);
/// let _ = panda.secret_inner_thoughts();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panda {
    name: String,
    sleep_hours: u32,
    is_fluffy: bool,
}

impl Panda {
    /// Create a fluffy panda.
    pub fn new(name: impl Into<String>, sleep_hours: u32) -> Self {
        Self::with_fluffy(name, sleep_hours, DEFAULT_IS_FLUFFY)
    }

    /// Create a panda with an explicit fluffiness.
    pub fn with_fluffy(name: impl Into<String>, sleep_hours: u32, is_fluffy: bool) -> Self {
        let name = name.into();
        tracing::debug!(%name, sleep_hours, is_fluffy, "panda constructed");
        Self {
            name,
            sleep_hours,
            is_fluffy,
        }
    }

    /// The panda's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the panda.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Hours of sleep the panda takes per day.
    pub fn sleep_hours(&self) -> u32 {
        self.sleep_hours
    }

    /// Change the panda's sleep quota.
    pub fn set_sleep_hours(&mut self, sleep_hours: u32) {
        self.sleep_hours = sleep_hours;
    }

    /// A sneeze that gives away what the panda is thinking.
    ///
    /// The message is the same for every panda.
    pub fn make_noise(&self) -> String {
        format!(
            "ACHOOOO, my private inner thoughts are {}",
            self.secret_inner_thoughts()
        )
    }

    fn secret_inner_thoughts(&self) -> &'static str {
        "i like deviled eggs better than bamboo"
    }
}

/// A panda that also knows how tall it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiantPanda {
    #[serde(flatten)]
    base: Panda,
    height: f64,
}

impl GiantPanda {
    /// Create a giant panda. The first three arguments build the base panda.
    pub fn new(name: impl Into<String>, sleep_hours: u32, is_fluffy: bool, height: f64) -> Self {
        Self {
            base: Panda::with_fluffy(name, sleep_hours, is_fluffy),
            height,
        }
    }

    /// The embedded base panda.
    pub fn panda(&self) -> &Panda {
        &self.base
    }

    /// Mutable access to the embedded base panda.
    pub fn panda_mut(&mut self) -> &mut Panda {
        &mut self.base
    }

    /// The panda's name.
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// Rename the panda.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.base.set_name(name);
    }

    /// Hours of sleep the panda takes per day.
    pub fn sleep_hours(&self) -> u32 {
        self.base.sleep_hours()
    }

    /// Change the panda's sleep quota.
    pub fn set_sleep_hours(&mut self, sleep_hours: u32) {
        self.base.set_sleep_hours(sleep_hours);
    }

    /// See [`Panda::make_noise`].
    pub fn make_noise(&self) -> String {
        self.base.make_noise()
    }

    /// Height in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Brag about the panda's height.
    pub fn height_check(&self) -> String {
        format!("i am super tall panda at {}meters", self.height)
    }
}
