//! Notification dispatch — sends the composed reports and reconciles the
//! two outcomes independently.
//!
//! The candidate email is always sent; the interviewer summary only when
//! requested. The sends are issued concurrently and are not transactional:
//! only the candidate outcome is surfaced to the caller, an interviewer
//! failure is logged and dropped.

use tracing::{info, warn};

use crate::mailer::{MailEnvelope, Mailer};

/// Result of one publish dispatch.
#[derive(Debug, Clone, Copy)]
pub struct DispatchOutcome {
    pub candidate_delivered: bool,
}

pub async fn dispatch_reports(
    mailer: &dyn Mailer,
    candidate: MailEnvelope,
    interviewer: Option<MailEnvelope>,
) -> DispatchOutcome {
    let candidate_recipients = candidate.to.clone();
    let candidate_send = mailer.send(candidate);
    let interviewer_send = async {
        match interviewer {
            Some(envelope) => Some(mailer.send(envelope).await),
            None => None,
        }
    };

    let (candidate_result, interviewer_result) = tokio::join!(candidate_send, interviewer_send);

    match interviewer_result {
        Some(Ok(())) => info!("Interviewer summary delivered"),
        Some(Err(e)) => warn!("Failed to send interviewer summary: {e}"),
        None => {}
    }

    match candidate_result {
        Ok(()) => {
            info!("Results email delivered to {candidate_recipients:?}");
            DispatchOutcome {
                candidate_delivered: true,
            }
        }
        Err(e) => {
            warn!("Failed to deliver results email to {candidate_recipients:?}: {e}");
            DispatchOutcome {
                candidate_delivered: false,
            }
        }
    }
}
