// Culture category records.
use super::{Energy, SuggestionRecord};

pub static CULTURE: [SuggestionRecord; 30] = [
    SuggestionRecord {
        title: "British Museum",
        description: "Experience world treasures from ancient Egypt, Greece, and beyond.",
        duration: "120 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=British+Museum+London"),
    },
    SuggestionRecord {
        title: "Shakespeare's Globe Theatre",
        description: "Visit this reconstructed Elizabethan playhouse by the Thames.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Shakespeare's+Globe+London"),
    },
    SuggestionRecord {
        title: "Tate Modern",
        description: "Explore contemporary art in the converted Bankside Power Station.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Tate+Modern+London"),
    },
    SuggestionRecord {
        title: "National Gallery",
        description: "View masterpieces from Van Gogh to Da Vinci in Trafalgar Square.",
        duration: "120 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=National+Gallery+London"),
    },
    SuggestionRecord {
        title: "Westminster Abbey",
        description: "Visit the coronation site of British monarchs and royal tombs.",
        duration: "60 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Westminster+Abbey+London"),
    },
    SuggestionRecord {
        title: "Tower of London",
        description: "Discover medieval history, the Crown Jewels, and the White Tower.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Tower+of+London"),
    },
    SuggestionRecord {
        title: "British Library",
        description: "See the Magna Carta, Shakespeare's First Folio, and literary treasures.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=British+Library+London"),
    },
    SuggestionRecord {
        title: "Victoria & Albert Museum",
        description: "Explore decorative arts, fashion, and design through the centuries.",
        duration: "120 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Victoria+and+Albert+Museum+London"),
    },
    SuggestionRecord {
        title: "Natural History Museum",
        description: "Visit the cathedral-like architecture and dinosaur skeletons.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Natural+History+Museum+London"),
    },
    SuggestionRecord {
        title: "Imperial War Museum",
        description: "Experience WWI and WWII history through powerful exhibits.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Imperial+War+Museum+London"),
    },
    SuggestionRecord {
        title: "National Portrait Gallery",
        description: "See historical portraits of Britain's most famous figures.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=National+Portrait+Gallery+London"),
    },
    SuggestionRecord {
        title: "Courtauld Gallery",
        description: "View Impressionist masterpieces in Somerset House.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Courtauld+Gallery+London"),
    },
    SuggestionRecord {
        title: "Sir John Soane's Museum",
        description: "Explore this eccentric architect's house and collections.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Sir+John+Soane's+Museum+London"),
    },
    SuggestionRecord {
        title: "Wallace Collection",
        description: "Enjoy 18th-century French art and armor in Hertford House.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Wallace+Collection+London"),
    },
    SuggestionRecord {
        title: "Dulwich Picture Gallery",
        description: "Visit England's oldest public art gallery with masterworks.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Dulwich+Picture+Gallery+London"),
    },
    SuggestionRecord {
        title: "Horniman Museum",
        description: "Discover natural history and musical instruments in Forest Hill.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Horniman+Museum+London"),
    },
    SuggestionRecord {
        title: "Museum of London",
        description: "Trace London's history from Roman times to present day.",
        duration: "90 min",
        energy: Energy::Medium,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Museum+of+London"),
    },
    SuggestionRecord {
        title: "Foundling Museum",
        description: "Learn about London's first children's charity and Georgian art.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Foundling+Museum+London"),
    },
    SuggestionRecord {
        title: "Jewish Museum",
        description: "Explore Jewish heritage and Holocaust memorial in Camden.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Jewish+Museum+London"),
    },
    SuggestionRecord {
        title: "Garden Museum",
        description: "Discover British gardening history in Lambeth.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Garden+Museum+London"),
    },
    SuggestionRecord {
        title: "Fashion and Textile Museum",
        description: "Explore fashion design and textile exhibitions.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Fashion+and+Textile+Museum+London"),
    },
    SuggestionRecord {
        title: "Cartoon Museum",
        description: "Enjoy British cartoons, comics, and graphic novel art.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Cartoon+Museum+London"),
    },
    SuggestionRecord {
        title: "Freud Museum",
        description: "Visit Sigmund Freud's former home in Hampstead.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Freud+Museum+London"),
    },
    SuggestionRecord {
        title: "Handel & Hendrix House",
        description: "Explore the homes of two musical legends on Brook Street.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Handel+and+Hendrix+House+London"),
    },
    SuggestionRecord {
        title: "Charles Dickens Museum",
        description: "Visit this author's beautifully preserved Bloomsbury home.",
        duration: "60 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Charles+Dickens+Museum+London"),
    },
    SuggestionRecord {
        title: "Benjamin Franklin House",
        description: "Learn about this founding father's London residence.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Benjamin+Franklin+House+London"),
    },
    SuggestionRecord {
        title: "Sherlock Holmes Museum",
        description: "Visit the recreated Victorian detective's home on Baker Street.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Sherlock+Holmes+Museum+London"),
    },
    SuggestionRecord {
        title: "Keats House",
        description: "Explore the romantic poet's home in Hampstead Heath.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Keats+House+London"),
    },
    SuggestionRecord {
        title: "2 Willow Road",
        description: "Visit Ernö Goldfinger's modernist home in Hampstead.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=2+Willow+Road+London"),
    },
    SuggestionRecord {
        title: "Ragged School Museum",
        description: "Discover Victorian East London education history.",
        duration: "45 min",
        energy: Energy::Low,
        map_link: Some("https://www.google.com/maps/search/?api=1&query=Ragged+School+Museum+London"),
    },
];
