use std::fmt;

/// Analytical framing given to the completion model for one ensemble vote.
/// All three personas hit the same remote model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    Cnn,
    BiLstm,
    Transformer,
}

const RESPONSE_SCHEMA_INSTRUCTION: &str = r#"Return ONLY valid JSON in this exact format:
{
  "heartRate": number,
  "prInterval": number,
  "qrsDuration": number,
  "qtInterval": number,
  "stSegment": "description",
  "diagnosis": {
    "status": "normal" or "abnormal",
    "condition": "specific condition name",
    "details": "detailed clinical explanation",
    "confidence": number (0-100)
  }
}"#;

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Cnn, Persona::BiLstm, Persona::Transformer];

    pub fn key(&self) -> &'static str {
        match self {
            Persona::Cnn => "cnn",
            Persona::BiLstm => "bilstm",
            Persona::Transformer => "transformer",
        }
    }

    fn framing(&self) -> &'static str {
        match self {
            Persona::Cnn => {
                "You are a CNN-based ECG pattern recognition system. Analyze the ECG image focusing on:
- Spatial patterns and waveform morphology
- P wave, QRS complex, and T wave shapes
- ST segment elevation/depression
- Rhythm regularity and visual abnormalities

Detect: Arrhythmia, Ischemia, Conduction blocks, Myocardial infarction patterns."
            }
            Persona::BiLstm => {
                "You are a BiLSTM-based temporal sequence analyzer. Analyze the ECG focusing on:
- Temporal patterns and rhythm consistency
- R-R interval variations
- Heart rate variability
- Sequential abnormalities over time

Detect: Atrial fibrillation, Flutter, Bradycardia, Tachycardia, irregular rhythms."
            }
            Persona::Transformer => {
                "You are a Transformer-based attention mechanism for ECG analysis. Focus on:
- Long-range dependencies in the signal
- Subtle pattern correlations across leads
- Complex arrhythmia patterns
- Multi-lead signal coherence

Detect: Complex arrhythmias, Bundle branch blocks, Axis deviations, Chamber enlargements."
            }
        }
    }

    /// Full system prompt: persona framing followed by the JSON answer schema.
    pub fn system_prompt(&self) -> String {
        format!("{}\n\n{}", self.framing(), RESPONSE_SCHEMA_INSTRUCTION)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
