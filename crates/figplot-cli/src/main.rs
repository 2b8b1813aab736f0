mod cli;

use anyhow::{Context, Result};

use figplot_engine::logging::{init_logging, LoggingConfig};
use figplot_engine::{FormatRegistry, OutputConfig, OutputSink, Plotter};

use crate::cli::Request;

fn main() -> Result<()> {
    let registry = FormatRegistry::discover();
    let cli = cli::parse(&registry);

    init_logging(LoggingConfig::from_verbosity(cli.verbose));

    let request = cli
        .validate(&registry)
        .unwrap_or_else(|err| cli::exit_with(&registry, err));

    run(request, &mut OutputSink::new())
}

/// Constructs the patch and emits it; the only step that can fail after validation.
fn run(request: Request, sink: &mut OutputSink) -> Result<()> {
    let Request { spec, output } = request;

    let patch = Plotter::new(spec).construct();
    sink.emit(patch, &output).with_context(|| match &output {
        OutputConfig::File { path, .. } => format!("failed to write {}", path.display()),
        other => format!("failed to {} figure", other.mode_name()),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use figplot_engine::driver::Driver;
    use figplot_engine::{Figure, ShapeSpec, Vec2};

    use super::*;

    /// Stands in for a window: counts presents and returns as if closed.
    #[derive(Clone, Default)]
    struct ClosedWindow(Rc<Cell<usize>>);

    impl Driver for ClosedWindow {
        fn present(&mut self, _figure: &Figure) -> figplot_engine::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("figplot-main-{}-{name}", std::process::id()))
    }

    fn circle() -> ShapeSpec {
        ShapeSpec::circle(Vec2::new(1.0, 2.0), 5.0)
    }

    #[test]
    fn file_request_creates_file_without_window() {
        let window = ClosedWindow::default();
        let path = temp_path("out.png");
        let output = OutputConfig::file(&path, &FormatRegistry::discover()).unwrap();

        let mut sink = OutputSink::new().with_window_driver(window.clone());
        run(Request { spec: circle(), output }, &mut sink).unwrap();

        assert!(path.exists());
        assert_eq!(window.0.get(), 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn show_request_waits_for_window_and_writes_nothing() {
        let window = ClosedWindow::default();
        let path = temp_path("never.png");

        let mut sink = OutputSink::new().with_window_driver(window.clone());
        run(Request { spec: circle(), output: OutputConfig::Show }, &mut sink).unwrap();

        assert_eq!(window.0.get(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn write_failure_names_the_path() {
        let path = temp_path("missing-dir").join("out.svg");
        let output = OutputConfig::file(&path, &FormatRegistry::discover()).unwrap();

        let err = run(Request { spec: circle(), output }, &mut OutputSink::new()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to write"));
    }

    #[test]
    fn identical_requests_produce_identical_files() {
        let registry = FormatRegistry::discover();
        let spec = ShapeSpec::rectangle(Vec2::new(-1.0, 0.5), 3.0, 2.0, 20.0);
        let (a, b) = (temp_path("twice-a.png"), temp_path("twice-b.png"));

        for path in [&a, &b] {
            let output = OutputConfig::file(path, &registry).unwrap();
            run(Request { spec, output }, &mut OutputSink::new()).unwrap();
        }

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
        std::fs::remove_file(&a).unwrap();
        std::fs::remove_file(&b).unwrap();
    }
}
