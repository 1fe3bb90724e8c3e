//! Built-in personas: display name → system prompt.

use serde::{Deserialize, Serialize};

/// Appended to every persona prompt before it is sent.
pub const LENGTH_INSTRUCTION: &str = " Generate replies in 100 to 300 words max.";

/// A named preset system prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: &'static str,
    pub system_prompt: &'static str,
}

impl Persona {
    /// Name with every space removed, used in the session id
    pub fn compact_name(&self) -> String {
        self.name.replace(' ', "")
    }

    /// System message for the next call: prompt + length instruction
    pub fn system_message(&self) -> String {
        format!("{}{}", self.system_prompt, LENGTH_INSTRUCTION)
    }
}

/// Index into the built-in persona table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PersonaId(usize);

impl PersonaId {
    pub fn persona(&self) -> &'static Persona {
        &PERSONAS[self.0]
    }

    /// Look up a persona by its exact display name
    pub fn from_name(name: &str) -> Option<Self> {
        PERSONAS.iter().position(|p| p.name == name).map(PersonaId)
    }

    pub fn all() -> impl Iterator<Item = PersonaId> {
        (0..PERSONAS.len()).map(PersonaId)
    }
}

// Trailing spaces are part of the prompt text
const DEFAULT_PROMPT: &str = concat!(
    "You are a helpful assistant. \n",
    "Output Format-\n",
    "- Return all extracted facts as a JSON object with a single key \"output\", containing a list of strings.\n",
    "{\n",
    "'output': <string goes here>\n",
    "}    \n",
);

const HASHTAG_PROMPT: &str = concat!(
    "You are a hashtag generator AI agent. Your job is to generate hashtags based on give user \n",
    "text / situation / example etc.\n",
    "\n",
    "Output Format-\n",
    "- Return the generated hashtags as a comma separated list of strings.\n",
    "- Do not generate anything else.\n",
    "\n",
    "Output Examples-\n",
    "- Example 1:\n",
    "#Technology, #ArtificialIntelligence, #Economics\n",
    "- Example 2:\n",
    "#Startup, #Marketing, #Design\n",
    "- Example 3:\n",
    "#Business, #Marketing, #Finance\n",
    "\n",
);

/// Display order matters: the first entry is selected on startup.
pub static PERSONAS: [Persona; 6] = [
    Persona {
        name: "Default Persona",
        system_prompt: DEFAULT_PROMPT,
    },
    Persona {
        name: "Hashtag Generator",
        system_prompt: HASHTAG_PROMPT,
    },
    Persona {
        name: "Tech Guru",
        system_prompt: "You are an expert in technology, able to explain complex technical topics in simple terms.",
    },
    Persona {
        name: "Friendly Companion",
        system_prompt: "You are a cheerful and friendly assistant, always ready to offer positive support.",
    },
    Persona {
        name: "Professional Advisor",
        system_prompt: "You are a professional advisor, providing logical and business-oriented insights.",
    },
    Persona {
        name: "Creative Thinker",
        system_prompt: "You are a creative assistant who thinks outside the box and suggests innovative ideas.",
    },
];
