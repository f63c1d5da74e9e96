use std::cell::Cell;
use std::rc::Rc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use segview::logging::init_logging;
use segview::{
    glyph, DisplayConfig, DisplayDriver, ExtendedLayout, FrameStatus, HeadlessPresenter,
    Presenter, WindowPresenter,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "segview")]
#[command(about = "Seven-segment and register display for a clocked logic simulation", long_about = None)]
struct Cli {
    /// Simulation clock ticks per simulated second
    #[arg(long, default_value_t = 1024)]
    frequency: u32,

    /// Ticks to simulate; 0 runs until the window is closed
    #[arg(long, default_value_t = 65536)]
    ticks: u64,

    /// Segment size multiplier
    #[arg(long, default_value_t = 5)]
    scale: i32,

    /// Show only the digit bus, no register rows
    #[arg(long)]
    digits_only: bool,

    /// Present into memory instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Seed for the simulated register traffic
    #[arg(long)]
    seed: Option<u64>,

    /// env_logger filter, e.g. "segview=trace"
    #[arg(long)]
    log: Option<String>,
}

// ============================================================================
// SIMULATED BOARD
// ============================================================================

/// Control lines of the toy machine, one bit each in the control word.
const CONTROL_LINES: [u16; 16] = [
    1 << 0,  // AO
    1 << 1,  // AI
    1 << 2,  // II
    1 << 3,  // IO
    1 << 4,  // RO
    1 << 5,  // RI
    1 << 6,  // MI
    1 << 7,  // HLT
    1 << 8,  // FI
    1 << 9,  // J
    1 << 10, // CO
    1 << 11, // CE
    1 << 12, // OI
    1 << 13, // BI
    1 << 14, // SU
    1 << 15, // EO
];

const FLAG_CARRY: u8 = 0b10;
const FLAG_ZERO: u8 = 0b01;

/// Ticks between machine steps.
const STEP_TICKS: u64 = 256;

/// Stand-in for the simulated circuit: owns the signals the display samples.
struct Board {
    segments: Rc<Cell<u8>>,
    select: Rc<Cell<u8>>,
    counter: Rc<Cell<u8>>,
    flags: Rc<Cell<u8>>,
    control: Rc<Cell<u16>>,
    a: Rc<Cell<u8>>,
    b: Rc<Cell<u8>>,
    digits: usize,
    scan: usize,
    ticks: u64,
    rng: StdRng,
}

impl Board {
    fn new(digits: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            segments: Rc::new(Cell::new(0)),
            select: Rc::new(Cell::new(0)),
            counter: Rc::new(Cell::new(0)),
            flags: Rc::new(Cell::new(0)),
            control: Rc::new(Cell::new(0)),
            a: Rc::new(Cell::new(0)),
            b: Rc::new(Cell::new(1)),
            digits,
            scan: 0,
            ticks: 0,
            rng,
        }
    }

    fn clock(&mut self) {
        self.ticks += 1;
        if self.ticks % STEP_TICKS == 0 {
            self.step();
        }
        self.scan_output();
    }

    /// One instruction of an add loop: A += B, B gets a fresh operand.
    fn step(&mut self) {
        let (sum, carry) = self.a.get().overflowing_add(self.b.get());
        self.a.set(sum);
        self.b.set(self.rng.random_range(1..=32));
        self.counter.set((self.counter.get() + 1) & 0x0f);

        let mut flags = 0;
        if carry {
            flags |= FLAG_CARRY;
        }
        if sum == 0 {
            flags |= FLAG_ZERO;
        }
        self.flags.set(flags);

        let control = CONTROL_LINES
            .iter()
            .filter(|_| self.rng.random_bool(0.25))
            .fold(0u16, |acc, &line| acc | line);
        self.control.set(control);
    }

    /// Drives one digit per tick: the A register in decimal, ones on the right.
    fn scan_output(&mut self) {
        self.scan = (self.scan + 1) % self.digits;
        let place = self.digits - 1 - self.scan;
        let value = self.a.get() as u32;
        let digit = (value / 10u32.pow(place as u32)) % 10;

        // blank leading zeros
        let segments = if digit == 0 && place > 0 && value < 10u32.pow(place as u32) {
            0
        } else {
            glyph(digit as u8)
        };

        self.segments.set(segments);
        self.select.set(1 << self.scan);
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let config = DisplayConfig::builder()
        .frequency(cli.frequency)
        .segment_scale(cli.scale)
        .build();
    config.validate()?;

    let board = Board::new(config.digit_count, cli.seed);

    if cli.headless {
        let driver = build_driver(&config, &board, HeadlessPresenter::new(), cli.digits_only)?;
        let driver = run(driver, board, cli.ticks)?;
        println!(
            "simulated {} ticks, presented {} frames",
            cli.ticks,
            driver.presenter().frames_presented()
        );
    } else {
        let presenter = WindowPresenter::open(&config)?;
        let driver = build_driver(&config, &board, presenter, cli.digits_only)?;
        run(driver, board, cli.ticks)?;
    }

    Ok(())
}

fn build_driver<P: Presenter>(
    config: &DisplayConfig,
    board: &Board,
    presenter: P,
    digits_only: bool,
) -> Result<DisplayDriver<P>, Box<dyn std::error::Error>> {
    let mut driver = DisplayDriver::new(
        config,
        Rc::clone(&board.segments),
        Rc::clone(&board.select),
        presenter,
    )?;

    if !digits_only {
        let layout = ExtendedLayout::for_frame(config.width, config.height);
        driver.attach_register(&layout.counter, Rc::clone(&board.counter))?;
        driver.attach_register(&layout.flags, Rc::clone(&board.flags))?;
        driver.attach_register(&layout.control, Rc::clone(&board.control))?;
        driver.attach_register(&layout.a, Rc::clone(&board.a))?;
        driver.attach_register(&layout.b, Rc::clone(&board.b))?;
    }

    Ok(driver)
}

fn run<P: Presenter>(
    mut driver: DisplayDriver<P>,
    mut board: Board,
    ticks: u64,
) -> Result<DisplayDriver<P>, Box<dyn std::error::Error>> {
    let mut tick = 0u64;
    while ticks == 0 || tick < ticks {
        board.clock();
        if driver.process()? == FrameStatus::CloseRequested {
            log::info!("display closed after {} ticks", tick + 1);
            break;
        }
        tick += 1;
    }

    log::info!("presented {} frames", driver.frames_presented());
    Ok(driver)
}
