//! In-game HUD - egg counter.

use bevy::prelude::*;

use crate::core::GameState;
use crate::economy::EggLedger;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the egg count text.
#[derive(Component)]
pub struct EggCounter;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(Update, update_egg_counter.run_if(in_state(GameState::InGame)));
}

/// Spawn the HUD UI. The counter stays hidden until production starts.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::End,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Eggs: 0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.95, 0.8)),
                Node {
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
                Visibility::Hidden,
                EggCounter,
            ));
        });
}

fn update_egg_counter(
    ledger: Res<EggLedger>,
    mut counter: Query<(&mut Text, &mut Visibility), With<EggCounter>>,
) {
    if !ledger.is_changed() {
        return;
    }
    let Ok((mut text, mut visibility)) = counter.get_single_mut() else {
        return;
    };

    text.0 = format!("Eggs: {}", ledger.eggs);
    let wanted = if ledger.active {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    visibility.set_if_neq(wanted);
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
