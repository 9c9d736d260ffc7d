//! Roast prompt assembly and the generation collaborator seam.

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::GeminiClient;
use threadroast_common::lang;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete a single prompt. The output is returned verbatim; no
    /// post-processing, no retry.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

/// Build the roast instruction for one profile. Unsupported language codes
/// fall back to the default language's display name.
pub fn build_prompt(username: &str, lang_code: &str, content: &str) -> String {
    let language = lang::display_name(lang_code);
    format!(
        "Kamu adalah seorang Comica yang mahir dalam StandUp Comedy dan kamu pandai \
         melakukan roasting. Gunakan bahasa {language}, berikan roasting singkat \
         dengan kejam dan menyindir dalam bahasa gaul untuk profile Threads berikut: \
         {username}. Berikut detail dan beberapa thread-nya: {content}. Ingat untuk \
         tetap singkat dan padat dan juga hanya gunakan plain text tanpa format \
         khusus penulisan"
    )
}
