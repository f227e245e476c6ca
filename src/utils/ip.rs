//! IP 地址处理工具
//!
//! 客户端地址默认取 TCP 对端地址；仅当对端属于 trusted_proxies（IP 或 CIDR）时
//! 才采信 X-Forwarded-For / X-Real-IP。

use std::net::{IpAddr, SocketAddr};

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;
use tracing::{debug, warn};

/// 一条可信代理规则，单 IP 视为满前缀长度的网段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProxyNet {
    network: IpAddr,
    prefix_len: u8,
}

impl ProxyNet {
    fn parse(rule: &str) -> Option<Self> {
        let rule = rule.trim();
        match rule.split_once('/') {
            Some((network, prefix_len)) => {
                let network: IpAddr = network.parse().ok()?;
                let prefix_len: u8 = prefix_len.parse().ok()?;
                let max = if network.is_ipv4() { 32 } else { 128 };
                (prefix_len <= max).then_some(Self {
                    network,
                    prefix_len,
                })
            }
            None => {
                let network: IpAddr = rule.parse().ok()?;
                let prefix_len = if network.is_ipv4() { 32 } else { 128 };
                Some(Self {
                    network,
                    prefix_len,
                })
            }
        }
    }

    fn contains(&self, ip: &IpAddr) -> bool {
        match (ip, self.network) {
            (IpAddr::V4(ip), IpAddr::V4(net)) => {
                let mask = u32::MAX
                    .checked_shl(32 - self.prefix_len as u32)
                    .unwrap_or(0);
                (u32::from_be_bytes(ip.octets()) & mask) == (u32::from_be_bytes(net.octets()) & mask)
            }
            (IpAddr::V6(ip), IpAddr::V6(net)) => {
                let mask = u128::MAX
                    .checked_shl(128 - self.prefix_len as u32)
                    .unwrap_or(0);
                (u128::from_be_bytes(ip.octets()) & mask)
                    == (u128::from_be_bytes(net.octets()) & mask)
            }
            _ => false, // IPv4 vs IPv6 不匹配
        }
    }
}

/// 预解析的可信代理列表
#[derive(Debug, Clone, Default)]
pub struct TrustedProxies {
    nets: Vec<ProxyNet>,
}

impl TrustedProxies {
    pub fn new(rules: &[String]) -> Self {
        let nets = rules
            .iter()
            .filter_map(|rule| {
                let parsed = ProxyNet::parse(rule);
                if parsed.is_none() {
                    warn!("Ignoring invalid trusted proxy entry: {}", rule);
                }
                parsed
            })
            .collect();
        Self { nets }
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    pub fn is_trusted(&self, ip: &IpAddr) -> bool {
        self.nets.iter().any(|net| net.contains(ip))
    }

    /// 从 HttpRequest 提取客户端 IP
    pub fn client_ip(&self, req: &HttpRequest) -> Option<String> {
        self.resolve(req.peer_addr(), req.headers())
    }

    fn resolve(&self, peer: Option<SocketAddr>, headers: &HeaderMap) -> Option<String> {
        let peer_ip = peer.map(|addr| addr.ip());

        match peer_ip {
            Some(ip) if self.is_trusted(&ip) => {
                let real_ip = forwarded_ip(headers).unwrap_or_else(|| ip.to_string());
                debug!("Trusted proxy {} -> {}", ip, real_ip);
                Some(real_ip)
            }
            Some(ip) => Some(ip.to_string()),
            None => None,
        }
    }
}

/// X-Forwarded-For 取第一个（原始客户端），其次 X-Real-IP
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.trim().to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(
                HeaderName::from_static(k),
                HeaderValue::from_static(v),
            );
        }
        map
    }

    fn proxies(rules: &[&str]) -> TrustedProxies {
        TrustedProxies::new(&rules.iter().map(|r| r.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_cidr_and_single_ip_rules() {
        let trusted = proxies(&["127.0.0.1", "192.168.1.0/24", "2001:db8::/32"]);
        assert!(trusted.is_trusted(&"127.0.0.1".parse().unwrap()));
        assert!(trusted.is_trusted(&"192.168.1.50".parse().unwrap()));
        assert!(trusted.is_trusted(&"2001:db8::1".parse().unwrap()));
        assert!(!trusted.is_trusted(&"192.168.2.1".parse().unwrap()));
        assert!(!trusted.is_trusted(&"8.8.8.8".parse().unwrap()));
    }

    #[test]
    fn test_invalid_rules_are_skipped() {
        let trusted = proxies(&["not-an-ip", "10.0.0.0/40", "10.0.0.0/8"]);
        assert!(trusted.is_trusted(&"10.1.2.3".parse().unwrap()));
        assert_eq!(trusted.nets.len(), 1);
    }

    #[test]
    fn test_forwarded_header_only_from_trusted_peer() {
        let trusted = proxies(&["10.0.0.1"]);
        let h = headers(&[("x-forwarded-for", "203.0.113.7, 10.0.0.1")]);

        let via_proxy = trusted.resolve(Some("10.0.0.1:443".parse().unwrap()), &h);
        assert_eq!(via_proxy.as_deref(), Some("203.0.113.7"));

        let direct = trusted.resolve(Some("198.51.100.2:5000".parse().unwrap()), &h);
        assert_eq!(direct.as_deref(), Some("198.51.100.2"));
    }

    #[test]
    fn test_real_ip_fallback_and_missing_peer() {
        let trusted = proxies(&["10.0.0.1"]);
        let h = headers(&[("x-real-ip", "203.0.113.9")]);
        let resolved = trusted.resolve(Some("10.0.0.1:80".parse().unwrap()), &h);
        assert_eq!(resolved.as_deref(), Some("203.0.113.9"));

        assert_eq!(trusted.resolve(None, &h), None);
    }
}
