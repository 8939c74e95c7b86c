use anyhow::{Context, Result};
use log::{debug, warn};
use tiktoken_rs::{CoreBPE, cl100k_base};

/// Packs formatted contents into chunks that stay within a character and a token budget.
///
/// Tokens are counted with the `cl100k_base` encoding (GPT-4).
pub struct ContentSizeOptimizer {
    max_char: usize,
    max_token: usize,
    bpe: CoreBPE,
}

impl ContentSizeOptimizer {
    pub fn new(max_char: usize, max_token: usize) -> Result<Self> {
        let bpe = cl100k_base().context("Failed to load the cl100k_base encoding")?;
        Ok(Self { max_char, max_token, bpe })
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    /// Greedily concatenates `contents` in order.
    ///
    /// A new chunk starts whenever adding the next content would push either
    /// running total past its budget. A content larger than a budget on its
    /// own is never split; it ends up alone in its chunk. Characters are
    /// counted as Unicode scalar values, not bytes.
    pub fn optimize(&self, contents: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_chars = 0usize;
        let mut buffer_tokens = 0usize;

        for content in contents {
            let chars = content.chars().count();
            let tokens = self.count_tokens(content);
            if chars > self.max_char || tokens > self.max_token {
                warn!(
                    "Content of {} characters / {} tokens exceeds the budget of {} / {}",
                    chars, tokens, self.max_char, self.max_token
                );
            }

            let over_budget = buffer_chars + chars > self.max_char
                || buffer_tokens + tokens > self.max_token;
            if !buffer.is_empty() && over_budget {
                chunks.push(std::mem::take(&mut buffer));
                buffer_chars = 0;
                buffer_tokens = 0;
            }
            buffer.push_str(content);
            buffer_chars += chars;
            buffer_tokens += tokens;
        }
        if !buffer.is_empty() {
            chunks.push(buffer);
        }

        debug!("Packed {} contents into {} chunks", contents.len(), chunks.len());
        chunks
    }
}
