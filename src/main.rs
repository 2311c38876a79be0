use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;

use crate::frontend::session::Session;
use crate::frontend::tui::TuiConsole;

mod backend;
mod frontend;

fn main() -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::Relaxed);
    })?;

    let mut console = TuiConsole::new()?;
    let mut session = Session::new(interrupted);

    console.open()?;
    let result = session.run(&mut console);
    console.close()?;

    result?;
    Ok(())
}
