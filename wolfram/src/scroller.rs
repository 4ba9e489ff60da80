// scroller.rs - Application state driven once per frame by the front-end

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::{COLOR_SCHEMES, ColorScheme, SCREEN_SIZE};
use crate::generation::Generation;
use crate::grid::{GridSize, ScrollGrid};
use crate::rule::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Running,
    Paused,
    Help,
    Quit,
}

impl Mode {
    /// Help and Quit swallow everything except Escape, H and C.
    pub fn accepts_controls(self) -> bool {
        !matches!(self, Mode::Help | Mode::Quit)
    }
}

/// One user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Escape,
    ToggleHelp,
    CycleColor,
    TogglePause,
    Randomize,
    InitMiddle,
    CycleSize,
    RuleUp { big: bool },
    RuleDown { big: bool },
}

const SMALL_RULE_STEP: u8 = 1;
const BIG_RULE_STEP: u8   = 10;

/// Everything the tick loop needs, allocated once at the largest grid size.
#[derive(Debug)]
pub struct Scroller {
    rule: Rule,
    size: GridSize,
    mode: Mode,
    color_idx: usize,
    generation: Generation,
    grid: ScrollGrid,
    rng: StdRng,
}

impl Scroller {
    pub fn new(rule: Rule, size: GridSize) -> Self {
        Self::with_rng(rule, size, StdRng::from_entropy())
    }

    /// Deterministic randomize, for tests and reproducible runs.
    pub fn with_seed(rule: Rule, size: GridSize, seed: u64) -> Self {
        Self::with_rng(rule, size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rule: Rule, size: GridSize, rng: StdRng) -> Self {
        let capacity = GridSize::LARGEST.width();
        let mut scroller = Self {
            rule,
            size,
            mode: Mode::Running,
            color_idx: 0,
            generation: Generation::new(capacity, size.width()),
            grid: ScrollGrid::new(capacity, size.width()),
            rng,
        };
        scroller.restart();
        debug!(rule = %rule, size = %size, "scroller ready");
        scroller
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn color_scheme(&self) -> &'static ColorScheme {
        &COLOR_SCHEMES[self.color_idx]
    }

    pub fn cell_size_px(&self) -> usize {
        self.size.cell_size_px(SCREEN_SIZE)
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn grid(&self) -> &ScrollGrid {
        &self.grid
    }

    /// Advance one generation and push it onto the grid. No-op unless running.
    pub fn update_state(&mut self) {
        if self.mode != Mode::Running {
            return;
        }
        self.generation.step(self.rule);
        self.grid.record(self.generation.cells());
        debug!(
            fill_counter = self.grid.fill_counter(),
            start_row_idx = self.grid.start_row_idx(),
            "tick"
        );
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Escape => {
                self.mode = if self.mode == Mode::Help { Mode::Running } else { Mode::Quit };
                debug!(mode = ?self.mode, "mode changed");
            }
            Action::ToggleHelp => {
                self.mode = if self.mode != Mode::Help { Mode::Help } else { Mode::Running };
                debug!(mode = ?self.mode, "mode changed");
            }
            Action::CycleColor => {
                self.color_idx = (self.color_idx + 1) % COLOR_SCHEMES.len();
                debug!(scheme = self.color_scheme().name, "color scheme changed");
            }
            _ if !self.mode.accepts_controls() => {}
            Action::TogglePause => {
                self.mode = if self.mode == Mode::Running { Mode::Paused } else { Mode::Running };
                debug!(mode = ?self.mode, "mode changed");
            }
            Action::Randomize => {
                self.generation.randomize(&mut self.rng);
                debug!("generation randomized");
            }
            Action::InitMiddle => {
                self.generation.init_middle();
                debug!("generation reset to middle");
            }
            Action::CycleSize => {
                self.size = self.size.next();
                self.restart();
                debug!(size = %self.size, "grid size changed");
            }
            Action::RuleUp { big } => {
                self.rule = self.rule.raised(rule_step(big));
                debug!(rule = %self.rule, "rule changed");
            }
            Action::RuleDown { big } => {
                self.rule = self.rule.lowered(rule_step(big));
                debug!(rule = %self.rule, "rule changed");
            }
        }
    }

    /// Reset grid and generation for the current size; the seed row is the
    /// first recorded line.
    fn restart(&mut self) {
        let width = self.size.width();
        self.generation.set_width(width);
        self.grid.resize(width);
        self.grid.record(self.generation.cells());
    }
}

fn rule_step(big: bool) -> u8 {
    if big { BIG_RULE_STEP } else { SMALL_RULE_STEP }
}
