/* Positional checksum used to link blocks together.
Not a cryptographic hash: collisions are trivial to construct. */

/// Length of every rendered digest.
pub const DIGEST_LEN: usize = 8;

/// Sum of every byte weighted by its 1-based position, with 32-bit wraparound.
/// Bytes are read as signed, so anything past ASCII counts negative.
pub fn checksum(input: &str) -> i32 {
    input
        .bytes()
        .enumerate()
        .fold(0i32, |acc, (index, byte)| {
            let position = (index as i32).wrapping_add(1);
            acc.wrapping_add((byte as i8 as i32).wrapping_mul(position))
        })
}

/// Renders the checksum of `input` as 8 uppercase hex digits, least significant nibble first.
pub fn simple_hash(input: &str) -> String {
    let hash = checksum(input);

    (0..DIGEST_LEN)
        .map(|i| {
            let value = ((hash >> (i * 4)) & 0xF) as u8;
            if value < 10 {
                (b'0' + value) as char
            } else {
                (b'A' + (value - 10)) as char
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_checksum() {
        assert_eq!(checksum("Hello"), 1585);
        // 1585 == 0x631, written nibble-reversed
        assert_eq!(simple_hash("Hello"), "13600000");
    }

    #[test]
    fn empty_input() {
        assert_eq!(checksum(""), 0);
        assert_eq!(simple_hash(""), "00000000");
    }

    #[test]
    fn order_matters() {
        assert_ne!(simple_hash("AB"), simple_hash("BA"));
    }

    #[test]
    fn long_input_wraps() {
        let input = "\u{ff}".repeat(10_000);
        let wide: i64 = input
            .bytes()
            .enumerate()
            .map(|(i, b)| b as i8 as i64 * (i as i64 + 1))
            .sum();
        assert!(wide < i32::MIN as i64);
        assert_eq!(checksum(&input), wide as i32);

        let hash = simple_hash(&input);
        assert_eq!(hash.len(), DIGEST_LEN);
        assert!(hash.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
    }

    #[test]
    fn high_bytes_count_negative() {
        // "é" is 0xC3 0xA9: -61 * 1 + -87 * 2
        assert_eq!(checksum("é"), -235);
        assert_eq!(checksum("\u{7f}"), 127);
    }

    #[test]
    fn hex_letters() {
        // 65 * 1 + 66 * 2 == 197 == 0xC5
        assert_eq!(simple_hash("AB"), "5C000000");
        assert_eq!(simple_hash("BA"), "4C000000");
    }
}
