//! Instruction texts sent as the system message
//!
//! All prompts are Korean and ask for Korean-only answers.

use crate::types::{Actor, PhaseKind, SessionSettings, Stance};
use crate::FEEDBACK_DELIMITER;

const KOREAN_ONLY: &str = "한국어로만 대답해. 외국어를 사용하지 마.";

/// Instruction for the counterpart's turn in one phase
pub fn phase_instruction(topic: &str, side: Stance, kind: PhaseKind) -> String {
    let opponent = side.complement();
    let task = match kind {
        PhaseKind::Opening => "토론 주제에 맞게 너의 입장에서 논리적으로 입론을 구성해서 짧고 간결하게 말해.\n\
             입론은 3~4문장으로만 구성해."
            .to_string(),
        PhaseKind::Rebuttal => format!(
            "{opponent} 측 입론을 논리적으로 짧게 반박해.\n\
             반박은 3~4문장으로, 간결하고 논리적으로 해줘."
        ),
        PhaseKind::CounterRebuttal => format!(
            "{opponent} 측이 너의 주장에 대해 한 반박을 다시 반박해.\n\
             상대 반박의 허점을 한두 가지 짚고, 2~3문장으로 간결하게 말해."
        ),
        PhaseKind::Closing => format!(
            "지금까지의 토론을 바탕으로 {side} 측 입장을 정리하는 최종 발언을 해.\n\
             핵심 논거를 요약하고 3문장 이내로 마무리해."
        ),
    };
    format!("너는 '{topic}'에 대해 '{side}' 입장인 AI야.\n{task}\n{KOREAN_ONLY}")
}

/// Console label for the human's turn in one phase
pub fn human_turn_label(side: Stance, kind: PhaseKind) -> String {
    match kind {
        PhaseKind::Opening => format!("\n ({side} 측) 사용자의 입론: "),
        PhaseKind::Rebuttal => format!("\n ({side} 측) 반박을 입력하세요: "),
        PhaseKind::CounterRebuttal => format!("\n ({side} 측) 재반박을 입력하세요: "),
        PhaseKind::Closing => format!("\n ({side} 측) 정리 발언을 입력하세요: "),
    }
}

/// Note recorded after each phase
pub fn phase_note(side: Stance, actor: Actor, kind: PhaseKind) -> String {
    format!("{side} 측({}) {} 완료", actor.label(), kind.label())
}

/// Instruction for generating one debate topic
pub fn topic_instruction(settings: &SessionSettings) -> String {
    format!(
        "너는 토론 주제를 추천하는 AI야.\n\
         분야: {category}\n\
         대상: {level}\n\
         난이도: {difficulty}\n\
         찬성과 반대로 명확히 나뉠 수 있는 토론 주제를 하나만 제시해.\n\
         '~해야 한다' 형태의 한 문장으로, 설명이나 따옴표 없이 주제 문장만 출력해.\n\
         {KOREAN_ONLY}",
        category = settings.category,
        level = settings.user_level,
        difficulty = settings.difficulty,
    )
}

/// Instruction for evaluating the user's performance over the whole transcript
pub fn feedback_instruction(
    topic: &str,
    user_stance: Stance,
    bot_stance: Stance,
    settings: &SessionSettings,
) -> String {
    format!(
        "너는 토론 코치야. 주제는 '{topic}'이고, 사용자는 '{user_stance}', 상대는 '{bot_stance}' 입장이었어.\n\
         대화 기록에서 role이 user인 발언이 사용자의 발언이야.\n\
         사용자({level}) 수준을 고려해서 사용자의 논리성, 근거의 타당성, 반박의 적절성을 평가해.\n\
         잘한 점을 먼저 말하고, 마지막 줄에는 반드시 '{FEEDBACK_DELIMITER}' 뒤에 \
         사용자가 다음 토론에서 개선할 점을 한두 문장으로 적어.\n\
         {KOREAN_ONLY}",
        level = settings.user_level,
    )
}

/// Phase order guide shown before the debate starts
pub fn order_guide(user_stance: Stance) -> String {
    let mut lines = vec!["[토론 진행 순서 안내]".to_string()];
    for (i, phase) in crate::types::PHASES.iter().enumerate() {
        lines.push(format!(
            "{}. {} 측({}) {}",
            i + 1,
            phase.side,
            phase.actor(user_stance).label(),
            phase.kind.label()
        ));
    }
    lines.push(format!("{}. 토론 피드백 저장", crate::types::PHASES.len() + 1));
    lines.join("\n")
}
