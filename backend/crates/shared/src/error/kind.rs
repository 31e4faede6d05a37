//! Error Kind
//!
//! The handful of statuses the showroom can answer with.

use std::fmt;

/// エラー種別
///
/// 訪問者に見えるのは `NotFound` と `InternalServerError` だけです。
/// `BadGateway` / `ServiceUnavailable` はリード送信の副作用をログで
/// 分類するためにのみ使い、レスポンスにはなりません。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 404 - 車両・ページが存在しない
    NotFound,
    /// 500 - カタログ読み込みやテンプレート描画の失敗
    InternalServerError,
    /// 502 - Webhook 先が 2xx 以外を返した
    BadGateway,
    /// 503 - Webhook 先に届かない・タイムアウト
    ServiceUnavailable,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// 5xx はサーバー側でログに残す
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::BadGateway.status_code(), 502);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_only_not_found_is_visitor_side() {
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::BadGateway.is_server_error());
    }
}
