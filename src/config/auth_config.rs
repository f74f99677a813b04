//! 토큰 서명 설정 모듈
//!
//! 토큰 서명에 필요한 비밀키, 알고리즘, 수명을 하나의 구조체로 묶어
//! 관리합니다. 환경 변수에서 한 번 읽어 구성한 뒤 `TokenService` 생성자에
//! 명시적으로 전달되며, 이후에는 변경되지 않습니다.

use jsonwebtoken::Algorithm;
use std::env;

/// 토큰 발급/검증에 사용하는 서명 설정
///
/// 애플리케이션 시작 시 [`AuthConfig::from_env`]로 한 번 구성하고,
/// 토큰을 다루는 모든 컴포넌트에 동일한 인스턴스를 주입합니다.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// 대칭 서명 비밀키
    pub secret_key: String,
    /// 서명 알고리즘 (기본값: HS256)
    pub algorithm: Algorithm,
    /// 액세스 토큰 수명 (분 단위, 기본값: 60)
    pub token_lifetime_minutes: i64,
}

impl AuthConfig {
    /// 명시적인 값으로 설정을 생성합니다.
    ///
    /// 테스트에서 짧은 수명이나 별도 키를 주입할 때 사용합니다.
    pub fn new(secret_key: impl Into<String>, algorithm: Algorithm, token_lifetime_minutes: i64) -> Self {
        Self {
            secret_key: secret_key.into(),
            algorithm,
            token_lifetime_minutes,
        }
    }

    /// 환경 변수에서 서명 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// * `SECRET_KEY` - 대칭 서명 키. 미설정 시 개발용 기본값 사용 (경고 로그 출력)
    /// * `JWT_ALGORITHM` - 알고리즘 식별자 (기본값: "HS256")
    /// * `ACCESS_TOKEN_EXPIRE_MINUTES` - 토큰 수명 (기본값: 60)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # 안전한 서명 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn from_env() -> Self {
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("SECRET_KEY not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        let algorithm = env::var("JWT_ALGORITHM")
            .unwrap_or_else(|_| "HS256".to_string())
            .parse::<Algorithm>()
            .unwrap_or_else(|e| {
                log::warn!("JWT_ALGORITHM 파싱 실패: {:?}. 기본값 HS256 사용", e);
                Algorithm::HS256
            });

        let token_lifetime_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60);

        Self {
            secret_key,
            algorithm,
            token_lifetime_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_construction() {
        let config = AuthConfig::new("test-key", Algorithm::HS256, 30);

        assert_eq!(config.secret_key, "test-key");
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.token_lifetime_minutes, 30);
    }

    #[test]
    fn test_algorithm_identifier_parsing() {
        assert_eq!("HS256".parse::<Algorithm>().unwrap(), Algorithm::HS256);
        assert_eq!("HS512".parse::<Algorithm>().unwrap(), Algorithm::HS512);
        assert!("NOT_AN_ALG".parse::<Algorithm>().is_err());
    }
}
