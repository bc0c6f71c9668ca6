use crate::cipher::{Cipher, CipherKind, TextCipher};

/// A stored text together with the cipher it was encrypted with.
///
/// All fields are fixed at construction. The encrypted form is computed once
/// in [`Record::new`]; the decrypted form is recomputed on every call to
/// [`Record::decrypt`] and [`Record::describe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    text: String,
    owner: String,
    date: String,
    cipher: Cipher,
    encrypted_text: String,
}

impl Record {
    pub fn new(text: String, owner: String, date: String, cipher: Cipher) -> Self {
        let encrypted_text = cipher.encode(&text);
        Self {
            text,
            owner,
            date,
            cipher,
            encrypted_text,
        }
    }

    pub fn substitution(
        text: impl Into<String>,
        owner: impl Into<String>,
        date: impl Into<String>,
        source_alphabet: &str,
        target_alphabet: &str,
    ) -> Self {
        Self::new(
            text.into(),
            owner.into(),
            date.into(),
            Cipher::substitution(source_alphabet, target_alphabet),
        )
    }

    pub fn shift(
        text: impl Into<String>,
        owner: impl Into<String>,
        date: impl Into<String>,
        shift: i64,
    ) -> Self {
        Self::new(text.into(), owner.into(), date.into(), Cipher::shift(shift))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Length of the original text in chars.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }

    pub fn raw_text(&self) -> &str {
        &self.text
    }

    pub fn encrypted_text(&self) -> &str {
        &self.encrypted_text
    }

    pub fn cipher(&self) -> &Cipher {
        &self.cipher
    }

    pub fn kind(&self) -> CipherKind {
        self.cipher.kind()
    }

    pub fn decrypt(&self) -> String {
        self.cipher.decode(&self.encrypted_text)
    }

    /// One-line human readable rendering, including a fresh decryption.
    pub fn describe(&self) -> String {
        let decrypted = self.decrypt();
        match &self.cipher {
            Cipher::Substitution(_) => format!(
                "SUBSTITUTION: owner='{}', date='{}', original='{}', encrypted='{}', decrypted='{}'",
                self.owner, self.date, self.text, self.encrypted_text, decrypted
            ),
            Cipher::Shift(shift) => format!(
                "SHIFT: owner='{}', date='{}', shift={}, original='{}', encrypted='{}', decrypted='{}'",
                self.owner,
                self.date,
                shift.shift(),
                self.text,
                self.encrypted_text,
                decrypted
            ),
        }
    }
}
