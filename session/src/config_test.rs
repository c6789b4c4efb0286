use super::*;

#[test]
fn default_config_discards_commands_and_does_not_reconnect() {
    let config = SessionConfig::default();
    assert_eq!(config.command_prefix, '/');
    assert_eq!(config.command_policy, CommandPolicy::Discard);
    assert_eq!(config.reconnect.max_attempts, 0);
}

#[test]
fn command_policy_from_send_flag() {
    assert_eq!(CommandPolicy::from_send_flag(true), CommandPolicy::Send);
    assert_eq!(CommandPolicy::from_send_flag(false), CommandPolicy::Discard);
}
