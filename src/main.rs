use ayyregs::assignment::Assignment;
use ayyregs::error::RegError;
use ayyregs::logger;
use ayyregs::lr35902::registers::{Flag, PowerUpState, RegisterFile, RegisterPair};
use clap::Parser;
use log::{info, LevelFilter};

/// Build an LR35902 register file, poke at it and dump the result.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Register contents to start from
    #[arg(long, value_enum, default_value_t = PowerUpState::Zero)]
    state: PowerUpState,

    /// Clear all of F after the assignments ran
    #[arg(long)]
    reset_flags: bool,

    /// Flags to set (z, n, h, c)
    #[arg(long = "set-flag")]
    set_flags: Vec<Flag>,

    /// Flags to clear (z, n, h, c)
    #[arg(long = "clear-flag")]
    clear_flags: Vec<Flag>,

    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Writes such as `a=0x01`, `hl=0xbeef` or `sp=65534`
    assignments: Vec<Assignment>,
}

#[snafu::report]
fn main() -> Result<(), RegError> {
    let args = Args::parse();
    logger::init(args.log_level)?;

    let mut registers = RegisterFile::with_state(args.state);
    for assignment in &args.assignments {
        info!("Applying {}={:#06x}", assignment.target, assignment.value);
        assignment.apply(&mut registers);
    }

    if args.reset_flags {
        registers.reset_flags();
    }
    for flag in args.set_flags {
        registers.set_flag(flag);
    }
    for flag in args.clear_flags {
        registers.clear_flag(flag);
    }

    println!("{}", registers);
    for pair in RegisterPair::ALL {
        print!("{}: ${:04x}  ", pair.to_string().to_uppercase(), registers.read_pair(pair));
    }
    println!("FLAGS: {}", registers.flags());

    Ok(())
}
