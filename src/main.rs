//! Renders the kaokun cube overview to stdout.

use cube_overview::{Deck, Overview, OverviewGenerator};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> cube_overview::Result<()> {
    let generator = OverviewGenerator::builder().build()?;
    let overview = kaokun_cube();
    println!("{}", generator.render(&overview)?);
    Ok(())
}

fn kaokun_cube() -> Overview {
    let description = [
        "The goal for this cube is to have a high power cube that’s highly accessible to newer players. It should be a great first cube draft experience for someone who’s played some Magic and maybe watched LSV cube draft once or twice on YouTube, and wants to give it a go themselves.",
        "To aid accessibility, all cards must be English, non-foil, with an M15 frame and correct Oracle text where possible. I also prefer a traditional high fantasy art aethsetic where possible. As a happy coincidence the M15 frame requirement also means the cube has no cards from the reserved list.",
        "My playgroup includes people I've taught to play in the last few years, so I've tried to exclude cards that might be confusing during drafting and playing. To that end, I've banned a number of mechanics entirely: storm, morph, level up, initiative, etc. Originally I excluded all double-faced cards but I've decided to include the Magic Origins planeswalkers because I love Jace, Vryn's Prodigy.",
        "I don’t ascribe to a “10 two color archetypes” model of cube design. The list of archetypes below is intended to be evidence of the wide range of decks available even within the same color combinations, and is not an exhaustive list.",
    ]
    .join("\n\n");

    Overview {
        title: "The kaokun cube".to_string(),
        description,
        decks: vec![
            Deck::new("Monowhite Aggro", "w", 5, &["Isamaru, Hound of Konda", "Stoneforge Mystic", "Adanto Vanguard"]),
            Deck::new("Monoblue Control", "u", 3, &["Jace, the Mind Sculptor", "Counterspell", "Cryptic Command"]),
            Deck::new("Monoblack Aggro", "b", 3, &["Knight of the Ebon Legion", "Emperor of Bones", "Thoughtseize"]),
            Deck::new("Monored Aggro", "r", 5, &["Goblin Guide", "Chain Lightning", "Fireblast"]),
            Deck::new("Monogreen Stompy", "g", 4, &["Fyndhorn Elves", "Ursine Monstrosity", "Six"]),
            Deck::new("Azorius Control", "wu", 4, &["Swords to Plowshares", "Force of Will", "Teferi, Time Raveler"]),
            Deck::new("Dimir Reanimator", "ub", 5, &["Jace, Vryn's Prodigy", "Animate Dead", "Griselbrand"]),
            Deck::new("Dimir Aggro Control", "ub", 4, &["Snapcaster Mage", "Dauthi Voidwalker", "Baleful Strix"]),
            Deck::new("Dimir Control", "ub", 3, &["Damnation", "Preordain", "Night's Whisper"]),
            Deck::new("Rakdos Aggro Control", "br", 3, &["Deep-Cavern Bat", "Ragavan, Nimble Pilferer", "Alesha, Who Laughs at Fate"]),
            Deck::new("Rakdos Sneak Attack", "br", 3, &["Sneak Attack", "Kokusho, the Evening Star", "Ulamog, the Infinite Gyre"]),
            Deck::new("Gruul Midrange", "rg", 4, &["Pyrogoyf", "Esika's Chariot", "Bloodbraid Elf"]),
            Deck::new("Gruul Lands", "rg", 3, &["Orcish Lumberjack", "Titania, Protector of Argoth", "Wrenn and Six"]),
            Deck::new("Selesnya Ramp", "gw", 1, &["Elspeth, Sun's Champion", "Fanatic of Rhonas", "Mirari's Wake"]),
            Deck::new("Orzhov Control", "wb", 2, &["Austere Command", "Necropotence", "Lingering Souls"]),
            Deck::new("Orzhov Tokens", "wb", 3, &["Shadow Summoning", "Bitterblossom", "Intangible Virtue"]),
            Deck::new("Izzet Control", "ur", 3, &["Remand", "Kari Zev, Skyship Raider", "Electrolyze"]),
            Deck::new("Izzet Artifacts", "ur", 4, &["Urza, Lord High Artificer", "Goblin Welder", "Kappa Cannoneer"]),
            Deck::new("Izzet Twin", "ur", 4, &["Pestermite", "Kiki-Jiki, Mirror Breaker", "Expressive Iteration"]),
            Deck::new("Golgari Reanimator", "bg", 3, &["Archon of Cruelty", "Fauna Shaman", "Meren of Clan Nel Toth"]),
            Deck::new("Golgari Ramp", "bg", 3, &["Veteran Explorer", "Cabal Therapy", "Flare of Cultivation"]),
            Deck::new("Boros Aggro", "rw", 4, &["Mother of Runes", "Robber of the Rich", "Otharri, Suns' Glory"]),
            Deck::new("Simic Ramp", "gu", 5, &["Mana Drain", "Nissa, Who Shakes the World", "Hydroid Krasis"]),
            Deck::new("Simic Nadu", "gu", 5, &["Nadu, Winged Wisdom", "Lightning Greaves", "Springheart Nantuko"]),
            Deck::new("Bant Control", "gwu", 1, &["Noble Hierarch", "Loran of the Third Path", "Consecrated Sphinx"]),
            Deck::new("Esper Control", "wub", 3, &["Day of Judgment", "Fact or Fiction", "Toxic Deluge"]),
            Deck::new("Esper Reanimator", "wub", 3, &["Elesh Norn, Grand Cenobite", "Looter il-Kor", "Grave Titan"]),
            Deck::new("Grixis Reanimator", "ubr", 3, &["Chart a Course", "Exhume", "Glorybringer"]),
            Deck::new("Grixis Twin", "ubr", 3, &["Deceiver Exarch", "Demonic Tutor", "Splinter Twin"]),
            Deck::new("Jund", "brg", 3, &["Dark Confidant", "Lightning Bolt", "Tarmogoyf"]),
            Deck::new("Naya Ramp", "rgw", 1, &["Palace Jailer", "Ancient Grudge", "Avenger of Zendikar"]),
            Deck::new("Abzan Midrange", "wbg", 2, &["Knight of Autumn", "Vindicate", "Grist, the Hunger Tide"]),
            Deck::new("Jeskai Control", "urw", 3, &["Occult Epiphany", "Unholy Heat", "Path to Exile"]),
            Deck::new("Jeskai Twin", "urw", 4, &["Dig Through Time", "Zealous Conscripts", "Restoration Angel"]),
            Deck::new("Sultai Midrange", "bgu", 3, &["Tasigur, the Golden Fang", "Sylvan Library", "Ponder"]),
            Deck::new("Mardu Control", "rwb", 1, &["Fiery Confluence", "Balance", "Crabomination"]),
            Deck::new("Temur Twin", "gur", 2, &["Birthing Pod", "Mana Leak", "Imperial Recruiter"]),
            Deck::new("Temur Midrange", "gur", 4, &["Sakura-Tribe Elder", "Minsc & Boo, Timeless Heroes", "Oko, Thief of Crowns"]),
            Deck::new("5 Color Domain", "wubrg", 3, &["Leyline Binding", "Nishoba Brawler", "Territorial Kavu"]),
            Deck::new("5 Color Control", "wubrg", 3, &["Golos, Tireless Pilgrim", "Coalition Relic", "City of Brass"]),
        ],
    }
}
