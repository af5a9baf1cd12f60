//! Asistente de estudio: tabla ordenada de palabras clave → respuesta fija,
//! con un pool de respuestas genéricas elegidas al azar si nada coincide.

use rand::Rng;
use rand::seq::SliceRandom;

pub const GREETING: &str = "Hi! I'm your AI study assistant. I can help you with medical questions, explain concepts, and provide study guidance. How can I assist you today?";

struct Topic {
    keywords: &'static [&'static str],
    reply: &'static str,
}

// El orden importa: gana la primera coincidencia.
static TOPICS: &[Topic] = &[
    Topic {
        keywords: &["heart", "cardiac", "cardiovascular"],
        reply: "The cardiovascular system consists of the heart, blood vessels, and blood. The heart has four chambers: two atria (upper chambers) and two ventricles (lower chambers). Key concepts include cardiac output (CO = HR × SV), the cardiac cycle phases, and common conditions like myocardial infarction and heart failure. Would you like me to explain any specific aspect in more detail?",
    },
    Topic {
        keywords: &["brain", "nervous", "neuron"],
        reply: "The nervous system is divided into the central nervous system (brain and spinal cord) and peripheral nervous system. Key concepts include action potentials, neurotransmitters (dopamine, serotonin, acetylcholine), and common disorders like Parkinson's disease and Alzheimer's. The blood-brain barrier protects the brain from toxins. What specific neurological topic would you like to explore?",
    },
    Topic {
        keywords: &["hormone", "endocrine", "thyroid"],
        reply: "The endocrine system uses hormones to regulate body functions. Key glands include the pituitary (master gland), thyroid (metabolism), adrenals (stress response), and pancreas (blood sugar). Common disorders include diabetes, hypothyroidism, and Cushing's syndrome. The hypothalamic-pituitary axis controls many hormonal pathways. Which endocrine topic interests you most?",
    },
    Topic {
        keywords: &["lung", "respiratory", "breathing"],
        reply: "The respiratory system facilitates gas exchange. Key concepts include ventilation (breathing mechanics), perfusion (blood flow), and diffusion (gas exchange at alveoli). Important conditions include asthma, COPD, and pneumonia. The oxygen-hemoglobin dissociation curve shows how oxygen binds to hemoglobin. What respiratory concept would you like me to clarify?",
    },
    Topic {
        keywords: &["kidney", "renal", "urine"],
        reply: "The kidneys filter blood and regulate fluid balance. The nephron is the functional unit, consisting of glomerulus, tubules, and collecting duct. Key processes include filtration, reabsorption, and secretion. Important hormones include ADH (water balance) and aldosterone (sodium balance). Common conditions include acute kidney injury and chronic kidney disease. What renal topic needs clarification?",
    },
    Topic {
        keywords: &["stomach", "digestive", "gi", "gastrointestinal"],
        reply: "The GI system digests food and absorbs nutrients. Key organs include stomach (acid production), small intestine (absorption), liver (metabolism), and pancreas (enzymes). Important concepts include gastric acid regulation, nutrient absorption mechanisms, and conditions like peptic ulcers and IBD. Which digestive process would you like me to explain?",
    },
    Topic {
        keywords: &["study", "learn", "memorize"],
        reply: "Here are effective study strategies for medical students: 1) Active recall - test yourself frequently, 2) Spaced repetition - review material at increasing intervals, 3) Clinical correlation - connect basic science to patient cases, 4) Visual aids - use diagrams and flowcharts, 5) Group study - explain concepts to peers. Practice MCQs regularly to test your knowledge. What specific study challenge are you facing?",
    },
    Topic {
        keywords: &["exam", "test", "preparation"],
        reply: "For exam preparation: 1) Create a study schedule 2-3 weeks before, 2) Focus on high-yield topics, 3) Practice past papers and MCQs, 4) Form study groups for discussion, 5) Take regular breaks to avoid burnout, 6) Review weak areas identified through practice tests. The MCQs on this platform are great for self-assessment. Which exam are you preparing for?",
    },
    Topic {
        keywords: &["mcq", "question", "practice"],
        reply: "For effective MCQ practice: 1) Read questions carefully and identify key words, 2) Eliminate obviously wrong options first, 3) Look for clinical clues in the question stem, 4) Don't second-guess yourself too much, 5) Review explanations for both correct and incorrect answers, 6) Track your performance to identify weak areas. Try the different practice modes on this platform - mixed questions, system-based, or timed practice!",
    },
    Topic {
        keywords: &["medical school", "medicine", "doctor"],
        reply: "Medical education requires dedication and effective study strategies. Focus on understanding concepts rather than memorization, integrate basic sciences with clinical applications, and practice regularly with MCQs. Remember that becoming a doctor is a journey - be patient with yourself and celebrate small victories. The knowledge you're building now will help you provide excellent patient care. What aspect of medical education would you like guidance on?",
    },
];

static FALLBACKS: &[&str] = &[
    "That's an interesting question! Could you provide more specific details about the medical topic you'd like to explore? I'm here to help with anatomy, physiology, pathology, and study strategies.",
    "I'd be happy to help you with that medical concept! Could you be more specific about which system or topic you're interested in? I can explain cardiovascular, nervous, endocrine, respiratory, renal, or GI systems.",
    "Great question! To give you the most helpful answer, could you tell me more about the specific medical topic or study challenge you're facing? I'm here to support your learning journey.",
    "I'm here to help with your medical studies! Whether you need explanations of physiological processes, disease mechanisms, or study tips, just let me know what specific area you'd like to focus on.",
];

/// Respuesta para un mensaje del usuario. Coincidencia por subcadena sin
/// distinguir mayúsculas.
pub fn respond<R: Rng + ?Sized>(text: &str, rng: &mut R) -> &'static str {
    let lower = text.to_lowercase();
    TOPICS
        .iter()
        .find(|t| t.keywords.iter().any(|k| lower.contains(k)))
        .map(|t| t.reply)
        .or_else(|| FALLBACKS.choose(rng).copied())
        .unwrap_or(GREETING)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone)]
struct PendingReply {
    text: &'static str,
    due_at: f64,
}

/// Estado del widget de chat: historial, borrador y respuesta "escribiendo".
#[derive(Debug, Clone)]
pub struct AssistantChat {
    pub open: bool,
    pub minimized: bool,
    pub input: String,
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
}

impl Default for AssistantChat {
    fn default() -> Self {
        Self {
            open: false,
            minimized: false,
            input: String::new(),
            messages: vec![ChatMessage {
                sender: Sender::Assistant,
                text: GREETING.to_string(),
            }],
            pending: None,
        }
    }
}

impl AssistantChat {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Envía el borrador. Se ignora si está vacío o si aún hay una respuesta
    /// pendiente. La respuesta aparece tras `delay` segundos (ver `poll`).
    pub fn send<R: Rng + ?Sized>(&mut self, now: f64, delay: (f64, f64), rng: &mut R) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_typing() {
            return false;
        }
        self.input.clear();

        let reply = respond(&text, rng);
        let wait = if delay.1 > delay.0 {
            rng.gen_range(delay.0..delay.1)
        } else {
            delay.0
        };
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text,
        });
        self.pending = Some(PendingReply {
            text: reply,
            due_at: now + wait,
        });
        true
    }

    /// Publica la respuesta pendiente si ya toca. Devuelve si hubo cambio.
    pub fn poll(&mut self, now: f64) -> bool {
        match &self.pending {
            Some(p) if now >= p.due_at => {
                let text = p.text.to_string();
                self.pending = None;
                self.messages.push(ChatMessage {
                    sender: Sender::Assistant,
                    text,
                });
                true
            }
            _ => false,
        }
    }

    /// Segundos hasta la respuesta pendiente, para pedir repintado.
    pub fn time_to_reply(&self, now: f64) -> Option<f64> {
        self.pending.as_ref().map(|p| (p.due_at - now).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn keywords_match_case_insensitively() {
        let mut rng = StdRng::seed_from_u64(1);
        let reply = respond("Explain CARDIAC output please", &mut rng);
        assert!(reply.starts_with("The cardiovascular system"));
        let reply = respond("how do kidneys work", &mut rng);
        assert!(reply.starts_with("The kidneys filter blood"));
    }

    #[test]
    fn first_matching_topic_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        // "heart" (1º) y "exam" (8º): gana el primero de la tabla
        let reply = respond("heart exam tips", &mut rng);
        assert!(reply.starts_with("The cardiovascular system"));
        let reply = respond("practice for my exam", &mut rng);
        assert!(reply.starts_with("For exam preparation"));
    }

    #[test]
    fn unmatched_text_gets_a_fallback() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let reply = respond("hello there", &mut rng);
            assert!(FALLBACKS.contains(&reply));
        }
    }

    #[test]
    fn chat_reply_arrives_after_delay() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut chat = AssistantChat::default();
        assert_eq!(chat.messages().len(), 1);

        chat.input = "   ".into();
        assert!(!chat.send(0.0, (1.0, 3.0), &mut rng));

        chat.input = "What about the thyroid?".into();
        assert!(chat.send(0.0, (1.0, 3.0), &mut rng));
        assert!(chat.input.is_empty());
        assert!(chat.is_typing());

        chat.input = "another".into();
        assert!(!chat.send(0.5, (1.0, 3.0), &mut rng), "blocked while typing");

        assert!(!chat.poll(0.9));
        assert!(chat.poll(3.0));
        assert!(!chat.is_typing());

        let last = chat.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Assistant);
        assert!(last.text.starts_with("The endocrine system"));
        assert_eq!(chat.messages().len(), 3);
    }
}
