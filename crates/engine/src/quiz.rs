//! Quiz module - the periodic trivia interruption
//!
//! The engine only knows the [`QuizService`] trait: it reports every
//! milestone placement and the end of a game, and asks whether input is
//! currently blocked. [`QuizDeck`] is the bundled implementation: a bank of
//! multiple-choice questions asked in random order with shuffled choices.

use crate::core::SimpleRng;

/// Receiver of quiz-relevant game events
pub trait QuizService {
    /// A successful placement landed on a milestone (every Nth placement)
    fn on_placement_milestone(&mut self, placements: u32);

    /// The session ended with `score` points
    fn on_game_over(&mut self, _score: u32) {}

    /// While true, the engine ignores selection and placement input
    fn is_blocking(&self) -> bool {
        false
    }

    /// The question currently shown, if any
    fn prompt(&self) -> Option<&QuizPrompt> {
        None
    }

    /// Answer the open question with a 0-based choice index
    ///
    /// Returns whether the answer was right, or `None` when nothing is open
    /// or the index names no choice.
    fn answer(&mut self, _choice: usize) -> Option<bool> {
        None
    }
}

/// Quiz hook that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuiz;

impl QuizService for NoQuiz {
    fn on_placement_milestone(&mut self, _placements: u32) {}
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub incorrect: Vec<String>,
}

impl Question {
    pub fn new(prompt: &str, answer: &str, incorrect: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            incorrect: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A question as presented: choices in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    pub question: String,
    pub choices: Vec<String>,
    correct: usize,
}

impl QuizPrompt {
    /// Index of the right answer in `choices`
    pub fn correct_choice(&self) -> usize {
        self.correct
    }
}

/// Bank of questions asked at placement milestones
#[derive(Debug, Clone)]
pub struct QuizDeck {
    questions: Vec<Question>,
    rng: SimpleRng,
    open: Option<QuizPrompt>,
    asked: u32,
    correct: u32,
}

impl QuizDeck {
    pub fn new(questions: Vec<Question>, seed: u32) -> Self {
        Self {
            questions,
            rng: SimpleRng::new(seed),
            open: None,
            asked: 0,
            correct: 0,
        }
    }

    /// Deck with the bundled psychology questions
    pub fn with_default_questions(seed: u32) -> Self {
        Self::new(default_questions(), seed)
    }

    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions shown so far
    pub fn asked(&self) -> u32 {
        self.asked
    }

    /// Questions answered correctly so far
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Open a random question with shuffled choices
    pub fn pop_random(&mut self) -> Option<&QuizPrompt> {
        if self.questions.is_empty() {
            return None;
        }
        let question = self.rng.pick(&self.questions).clone();

        // Shuffle indices so a wrong choice spelled like the answer cannot
        // confuse which slot is right.
        let mut order: Vec<usize> = (0..=question.incorrect.len()).collect();
        self.rng.shuffle(&mut order);
        let answer_idx = question.incorrect.len();
        let correct = order.iter().position(|&i| i == answer_idx).unwrap_or(0);
        let choices = order
            .iter()
            .map(|&i| {
                question
                    .incorrect
                    .get(i)
                    .unwrap_or(&question.answer)
                    .clone()
            })
            .collect();

        self.asked += 1;
        self.open = Some(QuizPrompt {
            question: question.prompt,
            choices,
            correct,
        });
        self.open.as_ref()
    }
}

impl QuizService for QuizDeck {
    fn on_placement_milestone(&mut self, placements: u32) {
        if let Some(prompt) = self.pop_random() {
            tracing::info!(placements, question = %prompt.question, "quiz prompt opened");
        }
    }

    fn on_game_over(&mut self, score: u32) {
        tracing::info!(
            score,
            asked = self.asked,
            correct = self.correct,
            "quiz totals at game over"
        );
    }

    fn is_blocking(&self) -> bool {
        self.open.is_some()
    }

    fn prompt(&self) -> Option<&QuizPrompt> {
        self.open.as_ref()
    }

    fn answer(&mut self, choice: usize) -> Option<bool> {
        let prompt = self.open.as_ref()?;
        if choice >= prompt.choices.len() {
            return None;
        }
        let right = choice == prompt.correct;
        if right {
            self.correct += 1;
        }
        self.open = None;
        tracing::debug!(choice, right, "quiz answered");
        Some(right)
    }
}

fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which part of the brain is primarily responsible for processing emotions?",
            "Amygdala",
            &["Cerebellum", "Hippocampus", "Thalamus"],
        ),
        Question::new(
            "What is the term for the process by which a conditioned response \
             gradually disappears?",
            "Extinction",
            &["Habituation", "Sensitization", "Spontaneous recovery"],
        ),
        Question::new(
            "Which psychological perspective focuses on the role of unconscious drives \
             and childhood experiences?",
            "Psychodynamic",
            &["Behavioral", "Cognitive", "Humanistic"],
        ),
    ]
}
