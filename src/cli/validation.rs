//! CLI argument validation functions
//!
//! Value parsers used by clap for arguments that need more than a type check.

use std::fs;
use std::path::PathBuf;

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a file path exists, is a file and can be opened
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    fs::File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Cannot read configuration file '{}': {}", path_str, e))
}

/// Validate host address format (basic validation)
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(' ') {
        return Err("Host address cannot contain spaces".to_string());
    }

    // Dotted digits must be a real IPv4 address
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return host
            .parse::<std::net::Ipv4Addr>()
            .map(|_| host.to_string())
            .map_err(|_| format!("Invalid IPv4 address format: '{}'", host_str));
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_port_validation() {
        for port_str in ["1", "80", "3000", "65535"] {
            assert!(validate_port(port_str).is_ok(), "Port {} should be valid", port_str);
        }
        for port_str in ["0", "65536", "abc", "-1", ""] {
            assert!(validate_port(port_str).is_err(), "Port {} should be invalid", port_str);
        }
    }

    #[test]
    fn test_host_validation() {
        for host in ["localhost", "127.0.0.1", "0.0.0.0", "192.168.1.1", "my-server.local"] {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }

        let too_long = "x".repeat(300);
        for host in ["", "   ", "host with spaces", "999.999.999.999", "1.2.3", too_long.as_str()] {
            assert!(validate_host_address(host).is_err(), "Host '{}' should be invalid", host);
        }
    }

    #[test]
    fn test_config_file_path_validation() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        let dir = file.path().parent().unwrap().to_str().unwrap();
        assert!(validate_config_file_path(dir).unwrap_err().contains("not a file"));

        assert!(
            validate_config_file_path("/no/such/usuarios.toml")
                .unwrap_err()
                .contains("does not exist")
        );
    }
}
