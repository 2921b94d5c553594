//! Common test utilities for integration tests.

#![allow(dead_code)]

use device_status_client::DeviceStatusClient;
use number_verification_client::NumberVerificationClient;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

/// Create a number verification client pointed at a mock server.
pub fn test_number_verification_client(mock_server: &MockServer) -> NumberVerificationClient {
    NumberVerificationClient::new(mock_server.uri(), Some(TEST_TOKEN.into()), None).unwrap()
}

/// Create a device status client pointed at a mock server.
pub fn test_device_status_client(mock_server: &MockServer) -> DeviceStatusClient {
    DeviceStatusClient::new(mock_server.uri(), Some(TEST_TOKEN.into()), None).unwrap()
}

/// Output captured from a dispatch, one entry per line.
pub fn output_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
