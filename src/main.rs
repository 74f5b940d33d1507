use anyhow::Result;
use wordbook::{repl, Shell, HELP};

fn main() -> Result<()> {
    env_logger::init();

    println!("{HELP}");
    let mut shell = Shell::new();
    repl::run(&mut shell)
}
