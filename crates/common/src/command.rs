//! Mesh tool command construction
//!
//! Translates a selected operation and its form fields into the ordered
//! argument list `wg-meshconf` expects. The tool distinguishes an absent
//! flag from a flag given an empty string, so empty and whitespace-only
//! optional values are omitted entirely.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional per-peer fields shared by addpeer and updatepeer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeerFields {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub allowed_ips: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub listen_port: Option<String>,
}

/// One invocation of the external mesh tool
#[derive(Debug, Clone)]
pub enum MeshCommand {
    Init,
    AddPeer { name: String, fields: PeerFields },
    UpdatePeer { name: String, fields: PeerFields },
    DelPeer { name: String },
    ShowPeers,
    GenConfig {
        name: Option<String>,
        output_dir: Option<PathBuf>,
    },
}

impl MeshCommand {
    /// Tool subcommand name
    pub fn name(&self) -> &'static str {
        match self {
            MeshCommand::Init => "init",
            MeshCommand::AddPeer { .. } => "addpeer",
            MeshCommand::UpdatePeer { .. } => "updatepeer",
            MeshCommand::DelPeer { .. } => "delpeer",
            MeshCommand::ShowPeers => "showpeers",
            MeshCommand::GenConfig { .. } => "genconfig",
        }
    }

    /// Whether the operation can change on-disk state.
    ///
    /// Drives the view refresh after submission: everything except
    /// showpeers may have touched the database or the output directory.
    pub fn mutates(&self) -> bool {
        !matches!(self, MeshCommand::ShowPeers)
    }

    /// Build the ordered argument list, without the database selector.
    ///
    /// Positional values come first, then `--flag value` pairs in fixed
    /// order for fields with a non-empty value. No validation of field
    /// contents happens here: malformed addresses, keys, and ports are
    /// forwarded verbatim and diagnosed by the tool itself.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.name().to_string()];

        match self {
            MeshCommand::Init | MeshCommand::ShowPeers => {}
            MeshCommand::AddPeer { name, fields }
            | MeshCommand::UpdatePeer { name, fields } => {
                args.push(name.clone());
                push_flag(&mut args, "--address", &fields.address);
                push_flag(&mut args, "--endpoint", &fields.endpoint);
                push_flag(&mut args, "--allowedips", &fields.allowed_ips);
                push_flag(&mut args, "--privatekey", &fields.private_key);
                push_flag(&mut args, "--listenport", &fields.listen_port);
            }
            MeshCommand::DelPeer { name } => {
                args.push(name.clone());
            }
            MeshCommand::GenConfig { name, output_dir } => {
                if let Some(name) = name {
                    if !name.trim().is_empty() {
                        args.push(name.clone());
                    }
                }
                if let Some(dir) = output_dir {
                    args.push("-o".to_string());
                    args.push(dir.to_string_lossy().to_string());
                }
            }
        }

        args
    }
}

/// Append `flag value` only when the value is non-empty after trimming
fn push_flag(args: &mut Vec<String>, flag: &str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.trim().is_empty() {
            args.push(flag.to_string());
            args.push(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_showpeers_take_no_args() {
        assert_eq!(MeshCommand::Init.to_args(), vec!["init"]);
        assert_eq!(MeshCommand::ShowPeers.to_args(), vec!["showpeers"]);
    }

    #[test]
    fn test_addpeer_name_and_address_only() {
        let cmd = MeshCommand::AddPeer {
            name: "PEER101".to_string(),
            fields: PeerFields {
                address: Some("10.0.0.1/32".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(
            cmd.to_args(),
            vec!["addpeer", "PEER101", "--address", "10.0.0.1/32"]
        );
    }

    #[test]
    fn test_addpeer_flag_order_is_fixed() {
        let cmd = MeshCommand::AddPeer {
            name: "PEER1".to_string(),
            fields: PeerFields {
                address: Some("10.0.0.1/32".to_string()),
                endpoint: Some("vpn.example.com:51820".to_string()),
                allowed_ips: Some("10.0.0.0/24".to_string()),
                private_key: Some("KEY=".to_string()),
                listen_port: Some("51820".to_string()),
            },
        };
        assert_eq!(
            cmd.to_args(),
            vec![
                "addpeer",
                "PEER1",
                "--address",
                "10.0.0.1/32",
                "--endpoint",
                "vpn.example.com:51820",
                "--allowedips",
                "10.0.0.0/24",
                "--privatekey",
                "KEY=",
                "--listenport",
                "51820",
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_fields_are_omitted() {
        let cmd = MeshCommand::UpdatePeer {
            name: "PEER1".to_string(),
            fields: PeerFields {
                address: Some(String::new()),
                endpoint: Some("   ".to_string()),
                listen_port: Some("51821".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(
            cmd.to_args(),
            vec!["updatepeer", "PEER1", "--listenport", "51821"]
        );
    }

    #[test]
    fn test_delpeer_is_positional_only() {
        let cmd = MeshCommand::DelPeer {
            name: "PEER1".to_string(),
        };
        assert_eq!(cmd.to_args(), vec!["delpeer", "PEER1"]);
    }

    #[test]
    fn test_genconfig_all_peers() {
        let cmd = MeshCommand::GenConfig {
            name: None,
            output_dir: Some(PathBuf::from("/srv/wg/output")),
        };
        assert_eq!(cmd.to_args(), vec!["genconfig", "-o", "/srv/wg/output"]);
    }

    #[test]
    fn test_genconfig_single_peer_without_output_dir() {
        let cmd = MeshCommand::GenConfig {
            name: Some("PEER1".to_string()),
            output_dir: None,
        };
        assert_eq!(cmd.to_args(), vec!["genconfig", "PEER1"]);
    }

    #[test]
    fn test_genconfig_blank_name_means_all_peers() {
        let cmd = MeshCommand::GenConfig {
            name: Some("  ".to_string()),
            output_dir: Some(PathBuf::from("/tmp/out")),
        };
        assert_eq!(cmd.to_args(), vec!["genconfig", "-o", "/tmp/out"]);
    }

    #[test]
    fn test_only_showpeers_leaves_state_untouched() {
        assert!(!MeshCommand::ShowPeers.mutates());
        assert!(MeshCommand::Init.mutates());
        assert!(MeshCommand::GenConfig { name: None, output_dir: None }.mutates());
    }
}
