//! User-facing text and prompt templates
//!
//! Everything the user reads, and everything sent to the completion endpoint,
//! comes from here so that the whole session speaks one language.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of prompts, fallbacks and status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese, for learners whose first language is Portuguese
    #[default]
    Pt,
    /// English
    En,
}

impl Locale {
    /// Instruction asking for one short sentence in the given tenses.
    /// `tenses` is already joined in master-list order.
    pub fn generation_prompt(self, tenses: &str) -> String {
        match self {
            Locale::Pt => format!(
                "Gere uma frase curta aleatória em inglês apenas com um verbo. Tempo verbal selecionado: {}",
                tenses
            ),
            Locale::En => format!(
                "Generate a short random English sentence with a single verb. Selected tense: {}",
                tenses
            ),
        }
    }

    /// Instruction asking whether `answer` is correct, and for the fix if not
    pub fn correction_prompt(self, answer: &str) -> String {
        match self {
            Locale::Pt => format!(
                "Verifique se a frase \"{}\" está correta. Se não estiver, forneça a correção.",
                answer
            ),
            Locale::En => format!(
                "Check whether the sentence \"{}\" is correct. If it is not, provide the correction.",
                answer
            ),
        }
    }

    /// Stored as the phrase when the completion carries no text
    pub fn phrase_fallback(self) -> &'static str {
        match self {
            Locale::Pt => "Resposta não encontrada.",
            Locale::En => "Response not found.",
        }
    }

    /// Stored as the correction when the completion carries no text
    pub fn correction_fallback(self) -> &'static str {
        match self {
            Locale::Pt => "Sem correções.",
            Locale::En => "No corrections.",
        }
    }

    pub fn no_tense_selected(self) -> &'static str {
        match self {
            Locale::Pt => "Por favor, selecione ao menos um tempo verbal.",
            Locale::En => "Please select at least one tense.",
        }
    }

    pub fn empty_answer(self) -> &'static str {
        match self {
            Locale::Pt => "Por favor, insira uma frase para correção.",
            Locale::En => "Please enter a sentence to correct.",
        }
    }

    pub fn generation_failed(self) -> &'static str {
        match self {
            Locale::Pt => "Erro ao gerar a frase. Tente novamente.",
            Locale::En => "Could not generate a sentence. Please try again.",
        }
    }

    pub fn correction_failed(self) -> &'static str {
        match self {
            Locale::Pt => "Erro ao corrigir. Tente novamente.",
            Locale::En => "Could not check the sentence. Please try again.",
        }
    }

    pub fn superseded(self) -> &'static str {
        match self {
            Locale::Pt => "Uma solicitação mais recente substituiu esta.",
            Locale::En => "A newer request replaced this one.",
        }
    }

    // Banner labels

    pub fn loading_label(self) -> &'static str {
        match self {
            Locale::Pt => "Carregando...",
            Locale::En => "Loading...",
        }
    }

    pub fn phrase_label(self) -> &'static str {
        match self {
            Locale::Pt => "Frase Gerada:",
            Locale::En => "Generated sentence:",
        }
    }

    pub fn correction_label(self) -> &'static str {
        match self {
            Locale::Pt => "Correção:",
            Locale::En => "Correction:",
        }
    }

    pub fn elapsed_label(self, seconds: u64) -> String {
        match self {
            Locale::Pt => format!("Tempo Decorrido: {} segundos", seconds),
            Locale::En => format!("Elapsed time: {} seconds", seconds),
        }
    }
}
