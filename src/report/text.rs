use crate::model::ratings::Signal;
use crate::model::thresholds::ScoringConfig;
use crate::pipeline::senses::SensesOutput;
use crate::report::{format_f64_2, format_f64_6};

pub fn render_report_text(output: &SensesOutput, config: &ScoringConfig) -> String {
    let mut out = String::new();

    out.push_str("SENSES Quality Report\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!("Z-threshold: {}\n", config.z_threshold));
    out.push_str(&format!(
        "Composite: {}\n\n",
        format_f64_6(output.composite)
    ));

    out.push_str("signal  score  input  out_of_domain  outliers  kept\n");
    for audit in &output.audits {
        out.push_str(&format!(
            "{:<6}  {:>5}  {:>5}  {:>13}  {:>8}  {:>4}\n",
            audit.signal.name(),
            format_f64_2(output.scores.get(audit.signal)),
            audit.n_input,
            audit.n_out_of_domain,
            audit.n_outliers,
            audit.n_kept
        ));
    }

    let empty = output
        .audits
        .iter()
        .filter(|a| a.n_kept == 0)
        .map(|a| a.signal.name())
        .collect::<Vec<_>>();
    if !empty.is_empty() {
        out.push_str(&format!(
            "\nNo usable samples (scored 0.00): {}\n",
            empty.join(", ")
        ));
    }
    out.push_str(&format!("Strongest sense: {}\n", strongest(output)));
    out
}

fn strongest(output: &SensesOutput) -> &'static str {
    let mut best = Signal::Hear;
    for signal in Signal::ALL {
        if output.scores.get(signal) > output.scores.get(best) {
            best = signal;
        }
    }
    best.name()
}
