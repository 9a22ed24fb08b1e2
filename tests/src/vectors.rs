//! RFC 7539 test vectors

/// One known-answer ChaCha20 encryption
pub struct ChaCha20Vector {
    /// Short label used in assertion messages
    pub name: &'static str,
    pub key: &'static str,
    pub nonce: &'static str,
    pub counter: u32,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

impl ChaCha20Vector {
    pub fn key(&self) -> Vec<u8> {
        decode(self.key)
    }

    pub fn nonce(&self) -> Vec<u8> {
        decode(self.nonce)
    }

    pub fn plaintext(&self) -> Vec<u8> {
        decode(self.plaintext)
    }

    pub fn ciphertext(&self) -> Vec<u8> {
        decode(self.ciphertext)
    }
}

fn decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad test vector hex: {}", e))
}

/// RFC 7539 Section 2.4.2 and Appendix A.1 (test vector #1)
pub const CHACHA20_VECTORS: &[ChaCha20Vector] = &[
    ChaCha20Vector {
        name: "A.1 #1 all-zero block",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        nonce: "000000000000000000000000",
        counter: 0,
        plaintext: "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        ciphertext: "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586",
    },
    ChaCha20Vector {
        name: "2.4.2 sunscreen",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        nonce: "000000000000004a00000000",
        counter: 1,
        plaintext: "4c616469657320616e642047656e746c656d656e206f662074686520636c617373206f66202739393a204966204920636f756c64206f6666657220796f75206f6e6c79206f6e652074697020666f7220746865206675747572652c2073756e73637265656e20776f756c642062652069742e",
        ciphertext: "6e2e359a2568f98041ba0728dd0d6981e97e7aec1d4360c20a27afccfd9fae0bf91b65c5524733ab8f593dabcd62b3571639d624e65152ab8f530c359f0861d807ca0dbf500d6a6156a38e088a22b65e52bc514d16ccf806818ce91ab77937365af90bbf74a35be6b40b8eedf2785e42874d",
    },
];
