//! Resolution of a single turn.
//!
//! A turn runs strictly in this order:
//!
//! 1. skill choice (suspends)
//! 2. actor's pre-skill hooks
//! 3. target choice among the opposing side (suspends)
//! 4. raw damage, 5. actor's damage hooks, 6. target resistance
//! 7-8. target ledger chain, rounding, minimum hit, HP loss
//! 9. skill effect onto the target's ledger
//! 10. resolution effect playback (suspends)
//! 11. actor's post-skill hooks
//! 12. actor gauge reset
//! 13. one tick of the actor's and the target's ledgers
//!
//! Nothing is mutated before step 7, so a contract violation in steps 1-3
//! or an effect the target's ledger would reject leaves the roster untouched.

use std::future::Future;
use std::time::Duration;

use battle_core::{
    BattleConfig, DamageBreakdown, Ledger, ModifierInstance, Roster, Skill, Slot, Unit,
};
use tracing::debug;

use crate::api::{DecisionKind, DecisionSource, PresentationSink, Result, RuntimeError};
use crate::report::{AppliedEffect, TurnRecord};

/// Collaborators and settings one turn needs.
#[derive(Clone, Copy)]
pub struct TurnContext<'a> {
    pub decisions: &'a dyn DecisionSource,
    pub sink: &'a dyn PresentationSink,
    pub battle: &'a BattleConfig,
    pub decision_timeout: Option<Duration>,
    /// Loop pass the turn belongs to.
    pub tick: u64,
}

/// Resolves the turn of the unit at `actor_slot`.
pub async fn resolve_turn(
    roster: &mut Roster,
    actor_slot: Slot,
    ctx: TurnContext<'_>,
) -> Result<TurnRecord> {
    let actor = roster
        .unit(actor_slot)
        .ok_or(RuntimeError::UnknownSlot(actor_slot))?;

    let skill = choose_skill(actor, &ctx).await?;
    actor.perks.before_skill(actor, &skill);

    let target_side = actor_slot.side.opposite();
    let target_id = {
        let candidates: Vec<&Unit> = roster.side(target_side).iter().collect();
        let chosen = decide(
            &ctx,
            actor,
            DecisionKind::Target,
            ctx.decisions.choose_target(actor, &candidates),
        )
        .await?;
        chosen.ok_or_else(|| RuntimeError::NoTargetChosen {
            actor: actor.id.clone(),
        })?
    };
    let target_slot =
        roster
            .find_in(target_side, &target_id)
            .ok_or_else(|| RuntimeError::TargetNotCandidate {
                actor: actor.id.clone(),
                target: target_id.clone(),
            })?;

    let target = roster
        .unit(target_slot)
        .ok_or(RuntimeError::UnknownSlot(target_slot))?;
    let damage = DamageBreakdown::compute(actor, target, &skill);
    if let Some(template) = &skill.effect {
        Ledger::check(template)?;
    }

    let (actor, target) = roster
        .pair_mut(actor_slot, target_slot)
        .ok_or(RuntimeError::UnknownSlot(target_slot))?;

    let hit = target.take_hit(damage.mitigated);

    let effect = match &skill.effect {
        Some(template) => {
            let applied = target.apply_modifier(template.clone(), ctx.battle.stacking)?;
            Some(AppliedEffect {
                id: template.id.clone(),
                applied,
            })
        }
        None => None,
    };

    ctx.sink.play_resolution_effect(actor, &skill, target).await;

    actor.perks.after_skill(actor, &skill);

    if let Some(value) = actor.reset_gauge() {
        ctx.sink.on_gauge_changed(actor, value);
    }

    let expired_on_actor = expired_ids(actor.tick_modifiers());
    let expired_on_target = expired_ids(target.tick_modifiers());

    debug!(
        tick = ctx.tick,
        actor = %actor.id,
        skill = %skill.id,
        target = %target.id,
        raw = damage.raw,
        mitigated = damage.mitigated,
        dealt = hit.dealt,
        remaining_hp = hit.remaining_hp,
        "turn resolved"
    );

    Ok(TurnRecord {
        tick: ctx.tick,
        actor: actor.id.clone(),
        skill: skill.id,
        target: target.id.clone(),
        damage,
        hit,
        effect,
        expired_on_actor,
        expired_on_target,
    })
}

/// Asks for a skill and swaps it for the actor's own copy.
async fn choose_skill(actor: &Unit, ctx: &TurnContext<'_>) -> Result<Skill> {
    let chosen = decide(
        ctx,
        actor,
        DecisionKind::Skill,
        ctx.decisions.choose_skill(actor),
    )
    .await?
    .ok_or_else(|| RuntimeError::NoSkillChosen {
        actor: actor.id.clone(),
    })?;

    actor
        .skill(&chosen.id)
        .cloned()
        .ok_or_else(|| RuntimeError::SkillNotOwned {
            actor: actor.id.clone(),
            skill: chosen.id,
        })
}

async fn decide<T>(
    ctx: &TurnContext<'_>,
    actor: &Unit,
    kind: DecisionKind,
    decision: impl Future<Output = T>,
) -> Result<T> {
    match ctx.decision_timeout {
        Some(timeout) => tokio::time::timeout(timeout, decision).await.map_err(|_| {
            RuntimeError::DecisionTimeout {
                actor: actor.id.clone(),
                kind,
                timeout,
            }
        }),
        None => Ok(decision.await),
    }
}

fn expired_ids(expired: Vec<ModifierInstance>) -> Vec<String> {
    expired.into_iter().map(|instance| instance.id).collect()
}
