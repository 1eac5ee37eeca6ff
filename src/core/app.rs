use crate::core::clock::format_ansic;
use crate::core::greeting::greet;
use crate::core::{Clock, FortuneSource, Report};

pub struct HelloApp<S: FortuneSource, C: Clock> {
    fortunes: S,
    clock: C,
    show_fortune: bool,
}

impl<S: FortuneSource, C: Clock> HelloApp<S, C> {
    pub fn new(fortunes: S, clock: C) -> Self {
        Self {
            fortunes,
            clock,
            show_fortune: false,
        }
    }

    pub fn with_fortune(mut self, show_fortune: bool) -> Self {
        self.show_fortune = show_fortune;
        self
    }

    pub fn run(&self, who: &str) -> Report {
        tracing::debug!("Building report for {:?}", who);

        let greeting = greet(who);
        let local_time = format_ansic(&self.clock.now());
        let fortune = self
            .show_fortune
            .then(|| self.fortunes.get().to_string());

        if let Some(f) = &fortune {
            tracing::debug!("Picked fortune: {}", f);
        }

        Report {
            greeting,
            local_time,
            fortune,
        }
    }
}
