//! Console trace of an iterative lookup, one block per server queried.

use ferrous_lookup_domain::{DecodedMessage, RecordData};
use ferrous_lookup_infrastructure::dns::{LookupStep, StepDecision};
use std::fmt::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SEPARATOR_WIDTH: usize = 64;

/// Prints every step as it arrives. The task ends once all emitters are
/// dropped.
pub fn spawn_step_printer(mut rx: mpsc::UnboundedReceiver<LookupStep>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(step) = rx.recv().await {
            print!("{}", render_step(&step));
        }
    })
}

pub fn render_step(step: &LookupStep) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    let _ = writeln!(out, "DNS server to query: {}", step.server);

    let Some(message) = step.response.as_deref() else {
        let reason = match &step.decision {
            StepDecision::Failed(reason) => reason.as_str(),
            _ => "no response",
        };
        let _ = writeln!(out, "Failed to get response from DNS server ({})", reason);
        return out;
    };

    render_overview(&mut out, message);

    if let StepDecision::Failed(_) = step.decision {
        let _ = writeln!(out, "\nError: Could not find next DNS server to query");
    }

    out
}

fn render_overview(out: &mut String, message: &DecodedMessage) {
    let _ = writeln!(out, "Reply received. Content overview:");
    let _ = writeln!(out, "{} Answers.", message.answer_count());
    let _ = writeln!(out, "{} Intermediate Name Servers.", message.authority_count());
    let _ = writeln!(
        out,
        "{} Additional Information Records.",
        message.additional_count()
    );

    let _ = writeln!(out, "\nAnswers section:");
    if message.answers.is_empty() {
        let _ = writeln!(out);
    }
    for record in &message.answers {
        if let RecordData::A(ip) = record.data {
            let _ = writeln!(out, "Name : {} IP: {}", record.name, ip);
        }
    }

    let _ = writeln!(out, "\nAuthority Section:");
    for record in &message.authorities {
        if let RecordData::Ns(ref ns) = record.data {
            let _ = writeln!(out, "Name : {} Name Server: {}", record.name, ns);
        }
    }

    let _ = writeln!(out, "\nAdditional Information Section:");
    for record in &message.additionals {
        match record.data {
            RecordData::A(ip) => {
                let _ = writeln!(out, "Name : {} IP : {}", record.name, ip);
            }
            RecordData::Ns(_) => {
                let _ = writeln!(out, "Name : {}", record.name);
            }
            RecordData::Other => {}
        }
    }
}
