use crate::shell::{self, Shell};
use anyhow::Result;

pub fn execute(shell: Shell) -> Result<()> {
    print!("{}", shell::function_for(shell));
    Ok(())
}
