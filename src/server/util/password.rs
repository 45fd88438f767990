//! Random password generation for newly created accounts.

use rand::Rng;

/// Length of passwords issued to people created by a roster import.
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

/// Characters a generated password is drawn from: letters, digits and symbols.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                         ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         0123456789\
                         !@#$%^&*()-_=+,.?/:;{}[]~";

/// Generates a random password of `length` characters.
///
/// Every character is drawn uniformly from ASCII letters, digits and
/// `!@#$%^&*()-_=+,.?/:;{}[]~` using the thread-local CSPRNG, which is seeded and
/// periodically reseeded from the operating system. Generation cannot fail, so the
/// plaintext is returned directly.
///
/// # Arguments
/// - `length` - Number of characters to generate
///
/// # Returns
/// - `String` - The generated plaintext password
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
