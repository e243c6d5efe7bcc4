use serde::{Deserialize, Serialize};

/// Languages every computed message is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Heading shown above a language block.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }
}

/// A message rendered in both languages at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub es: String,
}

impl Localized {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Spanish => &self.es,
        }
    }

    /// Join messages line by line, keeping each language separate.
    pub fn join_lines<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = Localized>,
    {
        let mut en = Vec::new();
        let mut es = Vec::new();
        for message in messages {
            en.push(message.en);
            es.push(message.es);
        }
        Self {
            en: en.join("\n"),
            es: es.join("\n"),
        }
    }
}

/// Every user-facing sentence the calculator produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message<'a> {
    BreakEven { name: &'a str, quantity: f64 },
    Unattainable { name: &'a str },
    SuggestedPrice { name: &'a str, margin: f64, price: f64 },
    InvalidNumbers,
    LengthMismatch,
}

impl Message<'_> {
    /// Render into a single language.
    pub fn render(&self, language: Language) -> String {
        match (self, language) {
            (Message::BreakEven { name, quantity }, Language::English) => format!(
                "{}The break-even point is {:.2} units.",
                prefix(name),
                quantity
            ),
            (Message::BreakEven { name, quantity }, Language::Spanish) => format!(
                "{}El punto de equilibrio es {:.2} unidades.",
                prefix(name),
                quantity
            ),
            (Message::Unattainable { name }, Language::English) => format!(
                "{}Break-even point cannot be calculated as the price per unit is less than or equal to the variable cost per unit.",
                prefix(name)
            ),
            (Message::Unattainable { name }, Language::Spanish) => format!(
                "{}No se puede calcular el punto de equilibrio porque el precio por unidad es menor o igual al costo variable por unidad.",
                prefix(name)
            ),
            (
                Message::SuggestedPrice {
                    name,
                    margin,
                    price,
                },
                Language::English,
            ) => format!(
                "{}The suggested price for a {}% profit margin is {:.2}.",
                prefix(name),
                margin,
                price
            ),
            (
                Message::SuggestedPrice {
                    name,
                    margin,
                    price,
                },
                Language::Spanish,
            ) => format!(
                "{}El precio sugerido para un margen de beneficio del {}% es {:.2}.",
                prefix(name),
                margin,
                price
            ),
            (Message::InvalidNumbers, Language::English) => {
                "Please enter valid numerical values for costs and prices.".to_string()
            }
            (Message::InvalidNumbers, Language::Spanish) => {
                "Por favor, introduzca valores numéricos válidos para los costos y precios."
                    .to_string()
            }
            (Message::LengthMismatch, Language::English) => {
                "Please make sure every field has the same number of comma-separated values."
                    .to_string()
            }
            (Message::LengthMismatch, Language::Spanish) => {
                "Asegúrese de que todos los campos tengan la misma cantidad de valores separados por comas."
                    .to_string()
            }
        }
    }

    /// Render into both languages from the same template.
    pub fn localize(&self) -> Localized {
        Localized {
            en: self.render(Language::English),
            es: self.render(Language::Spanish),
        }
    }
}

fn prefix(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{}: ", name)
    }
}
