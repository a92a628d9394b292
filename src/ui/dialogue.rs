//! Modal dialogue panels opened by interactions.

use bevy::prelude::*;

use crate::core::{DialogueClosedEvent, DialogueKind, DismissDialogueEvent, InteractionEvent, InteractionMode};
use crate::economy::{EggLedger, OwnedUpgrades, PurchaseEvent, Upgrade};

pub(super) const AFFORDABLE: Color = Color::srgb(0.3, 0.69, 0.31);
pub(super) const UNAVAILABLE: Color = Color::srgb(0.62, 0.62, 0.62);

/// Marker for an open dialogue panel.
#[derive(Component)]
pub struct DialoguePanel {
    pub kind: DialogueKind,
}

/// Marker for the button that closes the panel.
#[derive(Component)]
pub struct DismissButton;

/// Price button for one market upgrade.
#[derive(Component, Debug, Clone, Copy)]
pub struct BuyButton(pub Upgrade);

/// Name text of a market row, marked once bought.
#[derive(Component, Debug, Clone, Copy)]
pub struct UpgradeLabel(pub Upgrade);

/// Text shown for one dialogue.
pub struct DialogueContent {
    pub title: &'static str,
    pub body: &'static str,
    pub button: &'static str,
}

pub fn content_for(kind: DialogueKind) -> DialogueContent {
    match kind {
        DialogueKind::Farmer => DialogueContent {
            title: "Farmer",
            body: "Welcome to CluckHero! You must be the new hire, look a bit funny though. \
                   You sure you're in the right place? Anyways... I should get to work. \
                   Let me know if you have any questions!",
            button: "OK",
        },
        DialogueKind::Factory => DialogueContent {
            title: "Factory",
            body: "Welcome to the factory! Eggs are being produced automatically. \
                   Each egg is worth 1 coin.",
            button: "Start Production",
        },
        DialogueKind::Antagonist => DialogueContent {
            title: "???",
            body: "Another chicken in overalls. This farm gets stranger every day.",
            button: "Leave",
        },
        DialogueKind::Shop => DialogueContent {
            title: "Market",
            body: "Welcome to the market! Spend your eggs on upgrades.",
            button: "Close",
        },
    }
}

/// Open a panel for each interaction.
pub fn open_dialogue_panels(
    mut commands: Commands,
    mut interactions: EventReader<InteractionEvent>,
    panels: Query<(), With<DialoguePanel>>,
) {
    let mut open = !panels.is_empty();
    for event in interactions.read() {
        if open {
            warn!("Dialogue for {:?} requested while another is open", event.landmark);
            continue;
        }
        spawn_panel(&mut commands, event.landmark.dialogue());
        open = true;
    }
}

fn spawn_panel(commands: &mut Commands, kind: DialogueKind) {
    let content = content_for(kind);
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::End,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            DialoguePanel { kind },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Percent(90.0),
                        max_width: Val::Px(520.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(16.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.18)),
                    BorderColor(Color::srgb(0.42, 0.62, 0.93)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(content.title),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.42, 0.62, 0.93)),
                        Node {
                            margin: UiRect::bottom(Val::Px(8.0)),
                            ..default()
                        },
                    ));
                    panel.spawn((
                        Text::new(content.body),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        Node {
                            margin: UiRect::bottom(Val::Px(10.0)),
                            ..default()
                        },
                    ));
                    if kind == DialogueKind::Shop {
                        for upgrade in Upgrade::ALL {
                            spawn_upgrade_row(panel, upgrade);
                        }
                    }
                    panel
                        .spawn((
                            Button,
                            Node {
                                align_self: AlignSelf::End,
                                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                                ..default()
                            },
                            BackgroundColor(Color::srgb(0.3, 0.69, 0.31)),
                            DismissButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(content.button),
                                TextFont {
                                    font_size: 16.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                });
        });
}

fn spawn_upgrade_row(panel: &mut ChildBuilder, upgrade: Upgrade) {
    panel
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(8.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(upgrade.label()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                UpgradeLabel(upgrade),
            ));
            row.spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(UNAVAILABLE),
                BuyButton(upgrade),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new(format!("{} eggs", upgrade.price())),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        });
}

/// Turn presses on market price buttons into purchase requests.
pub fn shop_purchase_input(
    mode: Res<InteractionMode>,
    buttons: Query<(&Interaction, &BuyButton), Changed<Interaction>>,
    mut purchases: EventWriter<PurchaseEvent>,
) {
    if mode.dialogue() != Some(DialogueKind::Shop) {
        return;
    }
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            purchases.send(PurchaseEvent { upgrade: button.0 });
        }
    }
}

/// Grey out what cannot be bought and mark what is owned.
pub fn refresh_shop_buttons(
    ledger: Res<EggLedger>,
    owned: Res<OwnedUpgrades>,
    mut buttons: Query<(&BuyButton, &mut BackgroundColor)>,
    mut labels: Query<(&UpgradeLabel, &mut Text)>,
) {
    for (button, mut background) in buttons.iter_mut() {
        let color = if owned.can_buy(button.0, ledger.eggs) {
            AFFORDABLE
        } else {
            UNAVAILABLE
        };
        if background.0 != color {
            background.0 = color;
        }
    }
    for (label, mut text) in labels.iter_mut() {
        let wanted = if owned.owns(label.0) {
            format!("{} (Purchased)", label.0.label())
        } else {
            label.0.label().to_string()
        };
        if text.0 != wanted {
            text.0 = wanted;
        }
    }
}

/// Dismiss from the panel button or the keyboard.
pub fn dismiss_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mode: Res<InteractionMode>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<DismissButton>)>,
    mut dismissals: EventWriter<DismissDialogueEvent>,
) {
    if mode.dialogue().is_none() {
        return;
    }
    let pressed = buttons.iter().any(|interaction| *interaction == Interaction::Pressed);
    if pressed || keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        dismissals.send(DismissDialogueEvent);
    }
}

pub fn close_dialogue_panels(
    mut commands: Commands,
    mut closed: EventReader<DialogueClosedEvent>,
    panels: Query<(Entity, &DialoguePanel)>,
) {
    for event in closed.read() {
        for (entity, panel) in panels.iter() {
            if panel.kind == event.kind {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

/// Remove any panel left open when the world goes away.
pub fn cleanup_dialogue_panels(mut commands: Commands, panels: Query<Entity, With<DialoguePanel>>) {
    for entity in panels.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
