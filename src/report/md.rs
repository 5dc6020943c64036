use crate::types::report::ScoreReport;
use crate::types::scoring::Face;

pub fn to_markdown(report: &ScoreReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str("# Score Report\n\n");
    output.push_str(&format!("Profile: {}\n", result.profile));
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));

    output.push_str("## Faces\n\n");
    output.push_str("| face | raw | weighted |\n");
    output.push_str("|------|-----|----------|\n");
    for face in Face::ALL {
        output.push_str(&format!(
            "| {} | {:.4} | {:.4} |\n",
            face,
            result.faces.get(face),
            result.weighted_faces.get(face)
        ));
    }
    output.push('\n');

    output.push_str("## Aggregate\n\n");
    output.push_str(&format!(
        "- geo: {:.4}\n- final: {:.4}\n- gate: {} (floor_each {}, min_each {}, min_geo {})\n\n",
        result.geo,
        result.final_score,
        if result.gate_ok { "PASS" } else { "FAIL" },
        report.gate.floor_each,
        report.gate.min_each,
        report.gate.min_geo
    ));

    output.push_str("## Faces Below min_each\n\n");
    if report.failing_faces.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for face in &report.failing_faces {
            output.push_str(&format!("- {}: {:.4}\n", face, result.faces.get(*face)));
        }
        output.push('\n');
    }

    output.push_str("## Inputs\n\n");
    if report.inputs.is_empty() {
        output.push_str("- none\n");
    } else {
        for input in &report.inputs {
            output.push_str(&format!(
                "- {}: `{}` (sha256 `{}`)\n",
                input.role, input.path, input.sha256
            ));
        }
    }

    output
}
