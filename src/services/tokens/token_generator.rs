//! 인증 토큰 값 생성기

use rand::Rng;

/// 토큰 길이
pub const TOKEN_LENGTH: usize = 6;

/// 토큰에 사용하는 문자 집합 (대문자 + 숫자, 36자)
pub const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// 6자리 인증 토큰을 생성합니다.
///
/// 각 자리는 [`TOKEN_ALPHABET`]에서 복원 추출로 균등하게 뽑습니다.
/// `rand::rng()`는 OS 엔트로피로 시드된 CSPRNG(ChaCha 기반)입니다.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_shape() {
        for _ in 0..1_000 {
            let token = generate_token();
            assert_eq!(token.len(), TOKEN_LENGTH);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_tokens_are_not_repeated() {
        let tokens: HashSet<String> = (0..200).map(|_| generate_token()).collect();
        // 36^6 공간에서 200개 중 중복은 사실상 발생하지 않음
        assert!(tokens.len() >= 199);
    }

    #[test]
    fn test_alphabet_is_fully_used() {
        let seen: HashSet<char> = (0..2_000).flat_map(|_| generate_token().chars().collect::<Vec<_>>()).collect();
        assert_eq!(seen.len(), TOKEN_ALPHABET.len());
    }
}
