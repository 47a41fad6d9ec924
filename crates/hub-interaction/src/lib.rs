pub mod error;
pub mod gemini_sentiment_agent;
pub mod secret;

pub use error::AnalysisError;
pub use gemini_sentiment_agent::{GeminiSentimentAgent, SentimentAnalyzer, SentimentVerdict};
