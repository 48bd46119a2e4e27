use bunner_origin_gate_rs::{GateDecision, RejectionReason};

pub fn assert_allowed(decision: GateDecision) {
    assert_eq!(decision, GateDecision::Allowed, "expected allowed decision");
}

pub fn assert_unchecked(decision: GateDecision) {
    assert_eq!(decision, GateDecision::Unchecked, "expected unchecked decision");
}

pub fn assert_rejected(decision: GateDecision) -> RejectionReason {
    match decision {
        GateDecision::Rejected(reason) => reason,
        other => panic!("expected rejected decision, got {:?}", other),
    }
}
