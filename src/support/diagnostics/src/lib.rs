mod show;
mod warning;

use core::fmt::Debug;
pub use show::Show;
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show + Send + Sync {}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub warn_padded_field: bool,
    pub warn_padded_record: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: false,
            warn_padded_field: false,
            warn_padded_record: true,
        }
    }
}

pub struct Diagnostics {
    diagnostics: Vec<Box<dyn Diagnostic>>,
    flags: DiagnosticFlags,
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DiagnosticFlags::default())
    }
}

impl Diagnostics {
    pub fn new(flags: DiagnosticFlags) -> Self {
        Self {
            diagnostics: Vec::new(),
            flags,
        }
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn push(&mut self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            diagnostic.eprintln();
        } else {
            self.diagnostics.push(Box::new(diagnostic));
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Diagnostic> {
        self.diagnostics.iter().map(|diagnostic| &**diagnostic)
    }

    /// Renders every collected diagnostic, one per line.
    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut rendered = String::new();

        for diagnostic in self.iter() {
            diagnostic.show(&mut rendered)?;
            rendered.push('\n');
        }

        Ok(rendered)
    }

    pub fn print_all(&self) {
        for diagnostic in self.iter() {
            diagnostic.eprintln();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn collects_and_renders_in_order() {
        colored::control::set_override(false);

        let mut diagnostics = Diagnostics::default();
        diagnostics.push(WarningDiagnostic::new("first", "Foo"));
        diagnostics.push(WarningDiagnostic::plain("second"));

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.render().unwrap(),
            indoc! {"
                Foo: warning: first
                warning: second
            "}
        );
    }

    #[test]
    fn printing_skips_collection() {
        let mut diagnostics = Diagnostics::new(DiagnosticFlags {
            print_without_collecting: true,
            ..Default::default()
        });

        diagnostics.push(WarningDiagnostic::plain("printed"));
        assert!(diagnostics.is_empty());
    }
}
