use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use clap::{value_parser, Parser};
use env_logger::Env;
use log::{debug, info, warn};

use anyiconbar_send::{send, usage, Command, Endpoint};

const PROGRAM: &str = "anyiconbar-send";

/// Send one command datagram to AnyIconBar on 127.0.0.1:1738.
#[derive(Parser, Debug)]
#[command(name = PROGRAM, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// The command, e.g. `red`, `star.fill#red` or `quit`
    #[arg(value_parser = value_parser!(OsString))]
    message: Option<OsString>,

    #[arg(hide = true, value_parser = value_parser!(OsString))]
    rest: Vec<OsString>,
}

fn main() -> ExitCode {
    let env = Env::default()
        .filter_or("ANYICONBAR_SEND_LOG", "warn")
        .write_style_or("ANYICONBAR_SEND_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    // A leading "--" ends option parsing, so every user argument, a later
    // "--" included, is taken as a value.
    let argv = [OsString::from(PROGRAM), OsString::from("--")]
        .into_iter()
        .chain(env::args_os().skip(1));
    let args = Args::parse_from(argv);

    let Some(message) = args.message else {
        print!("{}", usage(PROGRAM));
        return ExitCode::from(1);
    };
    if !args.rest.is_empty() {
        debug!("ignoring extra arguments {:?}", args.rest);
    }

    // Delivery is never confirmed, so a failed send still exits 0.
    let command = match Command::try_from(message) {
        Ok(command) => command,
        Err(err) => {
            warn!("nothing sent: {err:#}");
            println!("Error: {err:#}");
            return ExitCode::SUCCESS;
        }
    };

    for entry in command.entries() {
        debug!("entry {:?} color {:?}", entry.symbol, entry.color_kind());
    }
    if command.is_quit() {
        debug!("receiver will exit on this command");
    }

    let dst = Endpoint::default();
    match send(&command, dst) {
        Ok(n) => {
            info!("{n} bytes → {dst}");
            println!("Sent: {command}");
        }
        Err(err) => {
            warn!("send to {dst} failed");
            println!("Error: {err:#}");
        }
    }

    ExitCode::SUCCESS
}
