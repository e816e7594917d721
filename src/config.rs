use crate::error::Error;
use ipnetwork::IpNetwork;
use lazy_static::lazy_static;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub type Shared = Arc<Config>;

/// Runtime settings. Every field has a default, so the bare binary serves
/// `127.0.0.1:8008` from `domains.txt` with a 60 second refresh.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_domains_file")]
    pub domains_file: PathBuf,
    #[serde(default = "default_api_bind_addr")]
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_api_timeout")]
    pub api_timeout: Duration,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_reload_interval")]
    pub reload_interval: Duration,
}

lazy_static! {
    // NOTE(XXX): Once the "ip" feature has stabilized we can use Ipv6Addr.is_unique_local[0].
    //            Presently this feature is unstable so we home-roll. See also RFC 4193[1].
    // [0]: https://doc.rust-lang.org/std/net/struct.Ipv6Addr.html#method.is_unique_local
    // [1]: https://www.rfc-editor.org/rfc/rfc4193.html
    static ref IPV6_UNIQUE_LOCAL_NETWORK: IpNetwork = IpNetwork::from_str("fc00::/7").unwrap();
}

fn default_domains_file() -> PathBuf {
    PathBuf::from("domains.txt")
}

fn default_api_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8008))
}

fn default_api_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_reload_interval() -> Duration {
    Duration::from_secs(60)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains_file: default_domains_file(),
            api_bind_addr: default_api_bind_addr(),
            api_timeout: default_api_timeout(),
            reload_interval: default_reload_interval(),
        }
    }
}

impl Config {
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.bind_addr_is_secure()?;
        Ok(conf)
    }

    fn bind_addr_is_secure(&self) -> Result<(), Error> {
        match self.api_bind_addr {
            SocketAddr::V4(v4_addr) => {
                let ip = v4_addr.ip();
                if !ip.is_loopback() && !ip.is_private() {
                    return Err(Error::InsecureAPIBind(IpAddr::V4(*ip)));
                }
                Ok(())
            }
            SocketAddr::V6(v6_addr) => {
                let ip = v6_addr.ip();
                if !ip.is_loopback() && !IPV6_UNIQUE_LOCAL_NETWORK.contains(IpAddr::V6(*ip)) {
                    return Err(Error::InsecureAPIBind(IpAddr::V6(*ip)));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.domains_file, PathBuf::from("domains.txt"));
        assert_eq!(config.api_bind_addr, "127.0.0.1:8008".parse().unwrap());
        assert_eq!(config.api_timeout, Duration::from_secs(30));
        assert_eq!(config.reload_interval, Duration::from_secs(60));
    }

    #[test]
    fn try_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = File::create(&path).unwrap();
        write!(f, r#"{{"domains_file": "allow.txt", "reload_interval": 5}}"#).unwrap();

        let config = Config::try_from_file(&path).unwrap();
        assert_eq!(config.domains_file, PathBuf::from("allow.txt"));
        assert_eq!(config.reload_interval, Duration::from_secs(5));
        assert_eq!(config.api_bind_addr, "127.0.0.1:8008".parse().unwrap());
    }

    #[test]
    fn try_from_file_rejects_public_bind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut f = File::create(&path).unwrap();
        write!(f, r#"{{"api_bind_addr": "203.0.113.10:8008"}}"#).unwrap();

        let err = Config::try_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::InsecureAPIBind(_)));
    }
}
