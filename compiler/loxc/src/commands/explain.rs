//! The `explain` command: describe a diagnostic code.

use lox_diagnostic::ErrorCode;

use super::{CommandError, Io};

/// Print what `code_str` means.
pub fn explain_error(code_str: &str, io: &mut Io<'_>) -> Result<(), CommandError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        return Err(CommandError::Usage(format!(
            "unknown error code `{code_str}` (known codes: {})",
            known.join(", ")
        )));
    };

    writeln!(
        io.out,
        "{code}: {} ({} error)",
        code.description(),
        code.phase()
    )?;
    Ok(())
}
