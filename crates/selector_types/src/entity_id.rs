//! Vanilla entity type identifiers.
//!
//! [`EntityId`] is the key type of the typed `type` argument builder. The set
//! is closed; [`EntityId::name`] is the bare identifier and `Display` writes
//! the namespaced form (`minecraft:zombie`).

use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Namespace shared by every vanilla entity identifier.
pub const NAMESPACE: &str = "minecraft";

macro_rules! entity_ids {
    ($($variant:ident => $name:literal,)*) => {
        /// A vanilla entity type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EntityId {
            $($variant,)*
        }

        impl EntityId {
            /// Every entity type, in declaration order.
            pub const ALL: &'static [EntityId] = &[$(EntityId::$variant,)*];

            /// The identifier without namespace (e.g. `"zombie"`).
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(EntityId::$variant => $name,)*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(EntityId::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

entity_ids! {
    AreaEffectCloud => "area_effect_cloud",
    ArmorStand => "armor_stand",
    Arrow => "arrow",
    Bat => "bat",
    Bee => "bee",
    Blaze => "blaze",
    Boat => "boat",
    Cat => "cat",
    CaveSpider => "cave_spider",
    ChestMinecart => "chest_minecart",
    Chicken => "chicken",
    Cod => "cod",
    CommandBlockMinecart => "command_block_minecart",
    Cow => "cow",
    Creeper => "creeper",
    Dolphin => "dolphin",
    Donkey => "donkey",
    DragonFireball => "dragon_fireball",
    Drowned => "drowned",
    Egg => "egg",
    ElderGuardian => "elder_guardian",
    EndCrystal => "end_crystal",
    EnderDragon => "ender_dragon",
    EnderPearl => "ender_pearl",
    Enderman => "enderman",
    Endermite => "endermite",
    Evoker => "evoker",
    EvokerFangs => "evoker_fangs",
    ExperienceBottle => "experience_bottle",
    ExperienceOrb => "experience_orb",
    EyeOfEnder => "eye_of_ender",
    FallingBlock => "falling_block",
    Fireball => "fireball",
    FireworkRocket => "firework_rocket",
    FishingBobber => "fishing_bobber",
    Fox => "fox",
    FurnaceMinecart => "furnace_minecart",
    Ghast => "ghast",
    Giant => "giant",
    Guardian => "guardian",
    Hoglin => "hoglin",
    HopperMinecart => "hopper_minecart",
    Horse => "horse",
    Husk => "husk",
    Illusioner => "illusioner",
    IronGolem => "iron_golem",
    Item => "item",
    ItemFrame => "item_frame",
    LeashKnot => "leash_knot",
    LightningBolt => "lightning_bolt",
    Llama => "llama",
    LlamaSpit => "llama_spit",
    MagmaCube => "magma_cube",
    Minecart => "minecart",
    Mooshroom => "mooshroom",
    Mule => "mule",
    Ocelot => "ocelot",
    Painting => "painting",
    Panda => "panda",
    Parrot => "parrot",
    Phantom => "phantom",
    Pig => "pig",
    Piglin => "piglin",
    PiglinBrute => "piglin_brute",
    Pillager => "pillager",
    Player => "player",
    PolarBear => "polar_bear",
    Potion => "potion",
    Pufferfish => "pufferfish",
    Rabbit => "rabbit",
    Ravager => "ravager",
    Salmon => "salmon",
    Sheep => "sheep",
    Shulker => "shulker",
    ShulkerBullet => "shulker_bullet",
    Silverfish => "silverfish",
    Skeleton => "skeleton",
    SkeletonHorse => "skeleton_horse",
    Slime => "slime",
    SmallFireball => "small_fireball",
    SnowGolem => "snow_golem",
    Snowball => "snowball",
    SpawnerMinecart => "spawner_minecart",
    SpectralArrow => "spectral_arrow",
    Spider => "spider",
    Squid => "squid",
    Stray => "stray",
    Strider => "strider",
    Tnt => "tnt",
    TntMinecart => "tnt_minecart",
    TraderLlama => "trader_llama",
    Trident => "trident",
    TropicalFish => "tropical_fish",
    Turtle => "turtle",
    Vex => "vex",
    Villager => "villager",
    Vindicator => "vindicator",
    WanderingTrader => "wandering_trader",
    Witch => "witch",
    Wither => "wither",
    WitherSkeleton => "wither_skeleton",
    WitherSkull => "wither_skull",
    Wolf => "wolf",
    Zoglin => "zoglin",
    Zombie => "zombie",
    ZombieHorse => "zombie_horse",
    ZombieVillager => "zombie_villager",
    ZombifiedPiglin => "zombified_piglin",
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAMESPACE}:{}", self.name())
    }
}

impl FromStr for EntityId {
    type Err = TypeError;

    /// Accepts `"zombie"` or `"minecraft:zombie"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = match s.split_once(':') {
            Some((NAMESPACE, rest)) => rest,
            Some(_) => return Err(TypeError::UnknownEntity(s.to_string())),
            None => s,
        };
        EntityId::from_name(bare).ok_or_else(|| TypeError::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_namespaced() {
        assert_eq!(EntityId::Zombie.to_string(), "minecraft:zombie");
        assert_eq!(EntityId::ArmorStand.name(), "armor_stand");
    }

    #[test]
    fn test_parse_bare_and_namespaced() {
        assert_eq!("creeper".parse::<EntityId>(), Ok(EntityId::Creeper));
        assert_eq!("minecraft:item_frame".parse::<EntityId>(), Ok(EntityId::ItemFrame));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("herobrine".parse::<EntityId>().is_err());
        assert!("mymod:zombie".parse::<EntityId>().is_err());
    }

    #[test]
    fn test_names_roundtrip() {
        for id in EntityId::ALL {
            assert_eq!(id.to_string().parse::<EntityId>(), Ok(*id));
        }
    }
}
