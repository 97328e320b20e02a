//! Presentation of calculation results.
//!
//! The calculator hands its outcome to a [`Presenter`]. [`Report`] holds the
//! formatted result block in display units; [`TextPresenter`] writes it to
//! any [`std::io::Write`] sink.

use std::io::Write;

use crate::error::{CalcError, Result};
use crate::input::Violations;
use crate::regulator::{Results, Topology};

/// Sink for calculation outcomes.
pub trait Presenter {
    /// Show the component values for a successful design.
    fn present(&mut self, topology: Topology, results: &Results) -> Result<()>;

    /// Show that the input was rejected.
    fn present_validation_failure(&mut self, violations: &Violations) -> Result<()>;
}

/// Results scaled to display units and formatted line by line.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: &'static str,
    pub schematic: &'static str,
    pub lines: Vec<String>,
}

impl Report {
    /// Format results the way they are shown to the user.
    ///
    /// Capacitors and the inductor are rounded to whole pF/uF/uH, the
    /// resistors to a tenth. `Rb` is only listed when the topology has one.
    pub fn new(topology: Topology, r: &Results) -> Self {
        let mut lines = vec![
            format!("L   = {:.0} uH (min)", r.lmin * 1e6),
            format!("Ct  = {:.0} pF", r.ct * 1e12),
            format!("Co  = {:.0} uF (min)", r.cout * 1e6),
            format!("Rsc = {:.1} Ω", r.rsc),
            format!("R2  = {:.1} KΩ", r.r2),
        ];
        if r.rb != 0.0 {
            lines.push(format!("Rb  = {:.0} Ω", r.rb));
        }

        Self {
            title: topology.title(),
            schematic: topology.schematic(),
            lines,
        }
    }

    /// Title followed by the component lines.
    pub fn to_text(&self) -> String {
        let mut text = String::from(self.title);
        text.push('\n');
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Presenter writing plain text.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, topology: Topology, results: &Results) -> Result<()> {
        let report = Report::new(topology, results);
        self.out
            .write_all(report.to_text().as_bytes())
            .map_err(CalcError::present)?;
        self.out.flush().map_err(CalcError::present)
    }

    fn present_validation_failure(&mut self, violations: &Violations) -> Result<()> {
        writeln!(self.out, "{}", violations.message()).map_err(CalcError::present)?;
        for violation in violations.iter() {
            writeln!(self.out, "  {}", violation).map_err(CalcError::present)?;
        }
        self.out.flush().map_err(CalcError::present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Field, Violation, ViolationKind};

    fn step_down_results() -> Results {
        Results {
            lmin: 58e-6,
            ct: 386.67e-12,
            cout: 25e-6,
            rsc: 0.33,
            r2: 30.0,
            rb: 0.0,
        }
    }

    #[test]
    fn test_report_lines() {
        let report = Report::new(Topology::StepDown, &step_down_results());
        assert_eq!(report.title, "Step-Down regulator");
        assert_eq!(report.schematic, "step_down.png");
        assert_eq!(
            report.lines,
            vec![
                "L   = 58 uH (min)",
                "Ct  = 387 pF",
                "Co  = 25 uF (min)",
                "Rsc = 0.3 Ω",
                "R2  = 30.0 KΩ",
            ]
        );
    }

    #[test]
    fn test_report_lists_rb_when_present() {
        let results = Results {
            rb: 55.3,
            ..step_down_results()
        };
        let report = Report::new(Topology::StepUp, &results);
        assert_eq!(report.lines.last().map(String::as_str), Some("Rb  = 55 Ω"));
    }

    #[test]
    fn test_text_presenter_writes_results() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter
            .present(Topology::StepDown, &step_down_results())
            .unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.starts_with("Step-Down regulator\nL   = 58 uH (min)\n"));
        assert!(!text.contains("Rb"));
    }

    #[test]
    fn test_text_presenter_writes_failure() {
        let mut violations = Violations::new();
        violations.push(Violation::new(Field::Freq, ViolationKind::OutOfRange { value: 150.0 }));
        violations.push(Violation::new(Field::Vin, ViolationKind::OutOfRange { value: 4.0 }));

        let mut presenter = TextPresenter::new(Vec::new());
        presenter.present_validation_failure(&violations).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 fields are out of limits");
        assert!(lines[1].starts_with("  vin:"));
        assert!(lines[2].starts_with("  freq:"));
    }

    /// Writer whose sink is gone.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_a_present_error() {
        let mut presenter = TextPresenter::new(ClosedPipe);

        let err = presenter
            .present(Topology::StepDown, &step_down_results())
            .unwrap_err();
        assert!(matches!(err, CalcError::Present { .. }));

        let err = presenter
            .present_validation_failure(&Violations::new())
            .unwrap_err();
        assert!(matches!(err, CalcError::Present { .. }));
    }
}
