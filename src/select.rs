use std::io::{self, BufRead, Write};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Resolves the input file. `None` means the user made no selection.
pub trait InputSelector {
    fn select_input(&mut self) -> Option<PathBuf>;
}

/// Resolves the output base name (without extension). `None` means no name.
pub trait OutputNamer {
    fn output_name(&mut self) -> Option<String>;
}

// ---------------------------------------------------------------------------
// Fixed values (command-line arguments, tests)
// ---------------------------------------------------------------------------

pub struct FixedInput(pub PathBuf);

impl InputSelector for FixedInput {
    fn select_input(&mut self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

pub struct FixedName(pub String);

impl OutputNamer for FixedName {
    fn output_name(&mut self) -> Option<String> {
        non_empty(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Interactive implementations
// ---------------------------------------------------------------------------

/// Native open-file dialog, starting in the user's home directory.
#[derive(Default)]
pub struct DialogSelector;

impl InputSelector for DialogSelector {
    fn select_input(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Select a file of numbers");
        if let Some(home) = dirs::home_dir() {
            dialog = dialog.set_directory(home);
        }
        dialog.pick_file()
    }
}

/// Asks for the name on a text console.
pub struct PromptNamer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptNamer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptNamer { input, output }
    }

    fn ask(&mut self) -> io::Result<String> {
        write!(self.output, "Enter the desired name of your output file: ")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer)
    }
}

impl PromptNamer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        PromptNamer::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> OutputNamer for PromptNamer<R, W> {
    fn output_name(&mut self) -> Option<String> {
        match self.ask() {
            Ok(answer) => non_empty(&answer),
            Err(e) => {
                log::error!("Failed to read output file name: {e}");
                None
            }
        }
    }
}

fn non_empty(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}
