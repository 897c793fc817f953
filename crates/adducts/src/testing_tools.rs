use miette::Diagnostic;

// NOTE: Renders the parts of a diagnostic that matter for testing (its message, cause, help, and labels) without
// the terminal-dependent layout of miette's graphical handler
pub(crate) fn describe(diagnostic: &dyn Diagnostic) -> String {
    let mut lines = vec![diagnostic.to_string()];

    let cause = diagnostic.diagnostic_source();
    if let Some(cause) = cause {
        lines.push(format!("caused by: {cause}"));
    }

    let help = diagnostic
        .help()
        .map(|h| h.to_string())
        .or_else(|| cause.and_then(|c| c.help()).map(|h| h.to_string()));
    if let Some(help) = help {
        lines.push(format!("help: {help}"));
    }

    for label in diagnostic.labels().into_iter().flatten() {
        lines.push(format!("label: {}", label.label().unwrap_or_default()));
    }

    lines.join("\n")
}

macro_rules! assert_miette_snapshot {
    ($diag:expr, @$snapshot:literal) => {{
        let error = $diag.unwrap_err();
        insta::with_settings!({
            description => stringify!($diag)
        }, {
            insta::assert_snapshot!($crate::testing_tools::describe(&*error), @$snapshot);
        });
    }};
}

pub(crate) use assert_miette_snapshot;
