use std::collections::HashMap;

use statduel_core::{FighterProfile, FighterStats, PromptPair, SeasonStatRecord, Sport};

use crate::labels::{format_contract, labels_for};
use crate::summary::{fighter_block, player_block};
use crate::template::PromptTemplate;

const BASKETBALL_SYSTEM: &str = "You are an NBA analyst who compares players using their \
statistics. You answer two separate questions and keep them apart.\n\n\
OVERALL WINNER weighs the whole career: scoring, playmaking, rebounding, shooting \
efficiency, peak level, longevity and games played. Decide who had the greater career.\n\n\
ONE_VS_ONE is a hypothetical one-on-one game between both players at their peak. Judge it \
on scoring ability, shot creation, efficiency, size, defense and athleticism. Assists carry \
no weight in a one-on-one game, so a high-assist player gains nothing from them here.\n\n\
The two answers can name different players: a bigger, more athletic player may win the \
one-on-one game while the other player had the greater career.\n\n\
Always follow the response format you are given, with every label on its own line.";

const MMA_SYSTEM: &str = "You are an MMA analyst who compares fighters using their career \
statistics and physical attributes.\n\n\
Weight class is the single most important factor in a hypothetical fight. The divisions \
from lightest to heaviest are Flyweight (125 lbs), Bantamweight (135 lbs), Featherweight \
(145 lbs), Lightweight (155 lbs), Welterweight (170 lbs), Middleweight (185 lbs), Light \
Heavyweight (205 lbs) and Heavyweight (265 lbs). A fighter more than one division heavier \
holds a large advantage, and statistics earned against smaller opponents do not offset it.\n\n\
After accounting for size, compare striking volume and accuracy, takedown offense, \
submission threat, finishing rates, reach and record.\n\n\
OVERALL_WINNER asks who had the better career; ONE_VS_ONE asks who wins if they fight now. \
The two answers can name different fighters.\n\n\
Always follow the response format you are given, with every label on its own line.";

const BASKETBALL_USER: PromptTemplate = PromptTemplate::new(
    "Compare these two NBA players based on their career statistics:\n\n\
PLAYER 1 ({{name1}}):\n{{summary1}}\n\
PLAYER 2 ({{name2}}):\n{{summary2}}\n\
Based on this data, provide:\n\
1. OVERALL WINNER: Who had the better career overall, considering production, efficiency, peak and longevity?\n\
2. ONE_VS_ONE: Who wins a one-on-one game at their peak? Ignore assists and focus on scoring, defense and physical tools.\n\
3. PLAYER 1 STRENGTHS: What does Player 1 do best?\n\
4. PLAYER 2 STRENGTHS: What does Player 2 do best?\n\
5. CONCLUSION: A short final verdict.\n\n\
Format your response EXACTLY as follows:\n{{format}}",
);

const MMA_USER: PromptTemplate = PromptTemplate::new(
    "Compare these two MMA fighters based on their career statistics:\n\n\
FIGHTER 1 ({{name1}}):\n{{summary1}}\n\
FIGHTER 2 ({{name2}}):\n{{summary2}}\n\
Based on this data, provide:\n\
1. OVERALL WINNER: Who is the better fighter overall? Weight class differences come first.\n\
2. ONE_VS_ONE: How would a fight between them play out, and how would it end?\n\
3. FIGHTER 1 STRENGTHS: What does Fighter 1 do best?\n\
4. FIGHTER 2 STRENGTHS: What does Fighter 2 do best?\n\
5. CONCLUSION: A short final verdict.\n\n\
Format your response EXACTLY as follows:\n{{format}}",
);

/// One side of a basketball comparison.
#[derive(Clone, Copy, Debug)]
pub struct PlayerSide<'a> {
    pub name: &'a str,
    pub seasons: &'a [SeasonStatRecord],
}

/// One side of an MMA comparison.
#[derive(Clone, Copy, Debug)]
pub struct FighterSide<'a> {
    pub name: &'a str,
    pub stats: &'a FighterStats,
    pub profile: Option<&'a FighterProfile>,
}

/// Renders comparison prompts.
///
/// Output depends only on the inputs: the same names and statistics always
/// produce byte-identical prompts.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComparisonPromptBuilder;

impl ComparisonPromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn system_prompt(&self, sport: Sport) -> &'static str {
        match sport {
            Sport::Basketball => BASKETBALL_SYSTEM,
            Sport::Mma => MMA_SYSTEM,
        }
    }

    pub fn players(&self, first: PlayerSide<'_>, second: PlayerSide<'_>) -> PromptPair {
        self.render(
            Sport::Basketball,
            (first.name, player_block(first.seasons)),
            (second.name, player_block(second.seasons)),
        )
    }

    pub fn fighters(&self, first: FighterSide<'_>, second: FighterSide<'_>) -> PromptPair {
        self.render(
            Sport::Mma,
            (first.name, fighter_block(first.stats, first.profile)),
            (second.name, fighter_block(second.stats, second.profile)),
        )
    }

    fn render(&self, sport: Sport, first: (&str, String), second: (&str, String)) -> PromptPair {
        let template = match sport {
            Sport::Basketball => &BASKETBALL_USER,
            Sport::Mma => &MMA_USER,
        };
        let vars = HashMap::from([
            ("name1", first.0.to_string()),
            ("summary1", first.1),
            ("name2", second.0.to_string()),
            ("summary2", second.1),
            ("format", format_contract(labels_for(sport))),
        ]);
        let user = template.render(&vars);
        tracing::debug!(?sport, prompt_len = user.len(), "rendered comparison prompt");
        PromptPair::new(self.system_prompt(sport), user)
    }
}
