//! Tap numbers that add up to the target before the countdown runs out.
//!
//! [`game`] is the synchronous round state machine, [`gameroom`] the async
//! host that drives it with a real clock and real players.
pub mod game;
pub mod gameroom;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Candidate values, targets and sums.
pub type Value = u32;
/// Countdown length and remaining time.
pub type Seconds = u32;
/// Index into the display order of a round.
pub type Position = usize;
/// Sequence number of a round within a room.
pub type Round = u64;

// ============================================================================
// ROUND PARAMETERS
// ============================================================================
/// Smallest candidate value.
pub const MIN_VALUE: Value = 1;
/// Largest candidate value.
pub const MAX_VALUE: Value = 10;
/// Trailing generated values left out of the target.
pub const RESERVED_TAIL: usize = 2;
/// Fewest candidates a round can be dealt.
pub const MIN_CANDIDATES: usize = 2;
/// Candidates dealt when the host does not say otherwise.
pub const DEFAULT_CANDIDATES: usize = 6;
/// Countdown when the host does not say otherwise.
pub const DEFAULT_SECONDS: Seconds = 10;

// ============================================================================
// HOST PACING
// ============================================================================
/// Countdown resolution.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);
/// Gap between a terminal transition and its announcement.
pub const NOTICE_DELAY: std::time::Duration = std::time::Duration::from_millis(500);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the board stays readable.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("interrupt received, exiting immediately");
                std::process::exit(0);
            }
            Err(e) => log::warn!("cannot listen for interrupt: {}", e),
        }
    });
}
