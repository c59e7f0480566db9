// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

use super::{CallRequest, mask_number};
use crate::config::Settings;

#[test]
fn test_mask_number_shows_six_digit_prefix() {
    assert_eq!(mask_number("15551234567"), "155512****");
}

#[test]
fn test_mask_number_short_input() {
    assert_eq!(mask_number("1555"), "1555****");
    assert_eq!(mask_number(""), "****");
}

#[test]
fn test_mask_never_leaks_full_number() {
    let masked = mask_number("15551234567");
    assert!(!masked.contains("15551234567"));
}

#[test]
fn test_call_request_has_exactly_three_fields() {
    let settings = Settings {
        assistant_id: Some("agent-1".to_string()),
        destination_number: Some("15551234567".to_string()),
        ..Settings::default()
    };
    let payload = CallRequest::from_settings(&settings, None);
    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert_eq!(object["agent_id"], "agent-1");
    assert_eq!(object["recipient_phone_number"], "15551234567");
    assert_eq!(object["debug_mode"], true);
}

#[test]
fn test_call_request_missing_values_pass_through_empty() {
    let payload = CallRequest::from_settings(&Settings::default(), None);
    assert_eq!(payload.agent_id, "");
    assert_eq!(payload.recipient_phone_number, "");
    assert!(payload.debug_mode);
}

#[test]
fn test_call_request_number_override_wins() {
    let settings = Settings {
        destination_number: Some("15550000000".to_string()),
        ..Settings::default()
    };
    let payload = CallRequest::from_settings(&settings, Some("15559999999"));
    assert_eq!(payload.recipient_phone_number, "15559999999");
}
