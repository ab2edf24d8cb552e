/// How a command finished, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The sheet loaded and output was printed.
    Completed,
    /// The sheet could not be loaded; the error screen was already printed.
    LoadFailed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::LoadFailed => 1,
        }
    }
}
