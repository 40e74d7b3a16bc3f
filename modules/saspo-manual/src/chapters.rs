//! Static text of the operations manual.

pub enum Block {
    Body(&'static str),
    SubHeading(&'static str),
    Code(&'static str),
}

pub struct Chapter {
    pub title: &'static str,
    /// Start the chapter at the top of a fresh page.
    pub new_page: bool,
    pub blocks: &'static [Block],
}

pub const TABLE_OF_CONTENTS: &[&str] = &[
    "1.  System Overview",
    "2.  The Dashboard Interface",
    "3.  Homepage & AI Tools",
    "4.  Video Management",
    "5.  Portfolio Schema (Games)",
    "6.  Academy Schema (Courses)",
    "7.  Team & Leadership Schema",
    "8.  Virtual Talent (AI Influencers)",
    "9.  Legal Data (Privacy & Terms)",
    "10. Contact & WhatsApp Redirect Logic",
];

pub const CHAPTERS: &[Chapter] = &[
    Chapter {
        title: "1. System Overview",
        new_page: true,
        blocks: &[Block::Body(
            "The Saspo World CMS uses a 'Flat-File Database' architecture. There is no SQL \
             database to manage: all website content lives in a single file named 'data.json'.\n\n\
             Editing the website from the Dashboard modifies this JSON file directly. Every save \
             is checked first, so invalid JSON is rejected before it can break the site.",
        )],
    },
    Chapter {
        title: "2. The Dashboard Interface",
        new_page: false,
        blocks: &[Block::Body(
            "1. SIDEBAR (ASSETS): Manages images and videos. Click a file to copy its name. \
             Each file shows the editor line where it is used, or 'unused'.\n\
             2. EDITOR (CODE): The raw 'data.json' editor. Use this to update text and links.\n\
             3. DOCS BUTTON: Downloads this manual.",
        )],
    },
    Chapter {
        title: "3. Homepage & AI Tools",
        new_page: true,
        blocks: &[
            Block::SubHeading("3.1 Hero Section"),
            Block::Body(
                "The 'Hero' section (the first thing visitors see) holds the tagline and the main \
                 buttons. The background video and main headline are fixed in the page template for \
                 performance. The 'Proprietary AI Tools' section below it is fully editable.",
            ),
            Block::SubHeading("3.2 AI Tools"),
            Block::Body(
                "Add as many tools as needed to the 'ai_tools' list. Each tool needs a title, a \
                 description, a link and an icon.",
            ),
            Block::Code(
                "{\n  \"title\": \"Saspo Script Gen\",\n  \"desc\": \"Automated narrative engine...\",\n  \"link\": \"https://...\",\n  \"icon\": \"Icon\"\n}",
            ),
        ],
    },
    Chapter {
        title: "4. Video Management",
        new_page: false,
        blocks: &[
            Block::Body(
                "Large video files are not uploaded directly; YouTube videos are embedded instead \
                 to keep the website light.",
            ),
            Block::SubHeading("4.1 Adding Videos"),
            Block::Body(
                "1. In the Dashboard header, click 'Add Video Link'.\n\
                 2. Enter an internal title (e.g. 'Showreel 2026').\n\
                 3. Paste the full YouTube URL.\n\
                 4. The video ID is extracted automatically and the video is embedded on the \
                 homepage under 'Youtube Videos'.\n\
                 A link that is referenced from 'data.json' cannot be removed until the reference \
                 is deleted.",
            ),
        ],
    },
    Chapter {
        title: "5. Portfolio Schema (Games)",
        new_page: true,
        blocks: &[
            Block::Body(
                "The game portfolio is stored in the 'games' object. Each game has a unique ID \
                 (e.g. 'brain-up').",
            ),
            Block::SubHeading("5.1 Special Case: Drone Delivery"),
            Block::Body(
                "The game with the ID 'drone-3d' is special: the template shows it as a large, \
                 full-width 'Featured Project' at the bottom of the section. Keep this ID unless \
                 the featured highlight should be removed.",
            ),
            Block::SubHeading("5.2 Data Fields"),
            Block::Code(
                "- \"title\": Game Title\n- \"genre\": Tag (e.g., \"Puzzle\")\n- \"img\": Filename from sidebar\n- \"link\": Download URL or \"#\"\n- \"description\": Short marketing blurb\n- \"features\": List of features [\"Multiplayer\", \"Offline\"]\n- \"privacy_policy\": Policy Object (See Chapter 9)",
            ),
        ],
    },
    Chapter {
        title: "6. Academy Schema (Courses)",
        new_page: false,
        blocks: &[
            Block::Body("The '.EDU' section is driven by the 'courses' list."),
            Block::SubHeading("6.1 Data Structure"),
            Block::Code(
                "- \"title\": Course Name\n- \"duration\": Time (e.g., \"3 Months\")\n- \"level\": Difficulty\n- \"modules\": A list of topics covered.\n- \"tools\": Software taught (e.g., \"Unreal Engine\").",
            ),
        ],
    },
    Chapter {
        title: "7. Team & Leadership",
        new_page: true,
        blocks: &[
            Block::Body(
                "Team profiles live in the 'team' list. Clicking a member card opens a detailed \
                 profile.",
            ),
            Block::SubHeading("7.1 LinkedIn Integration"),
            Block::Body(
                "To show a 'Connect on LinkedIn' button on a profile, add a 'socials' object with a \
                 'linkedin' key.",
            ),
            Block::Code("\"socials\": {\n    \"linkedin\": \"https://linkedin.com/in/username\"\n}"),
        ],
    },
    Chapter {
        title: "8. Virtual Talent",
        new_page: false,
        blocks: &[Block::Body(
            "The scrolling marquee of AI Influencers is driven by the 'ai_influencers' list. \
             Square images (1:1 aspect ratio) give the best result.",
        )],
    },
    Chapter {
        title: "9. Legal: Privacy & Terms",
        new_page: false,
        blocks: &[
            Block::Body(
                "The 'Privacy Policy' and 'Terms of Service' dialogs are generated from data; no \
                 HTML is needed. Provide the text in the 'privacy' and 'terms' objects inside \
                 'contact'.",
            ),
            Block::Code(
                "\"privacy\": {\n  \"updated\": \"Jan 2026\",\n  \"intro\": \"Introduction text...\",\n  \"sections\": [\n    {\"title\": \"Data\", \"content\": \"Details...\"}\n  ]\n}",
            ),
        ],
    },
    Chapter {
        title: "10. Contact System & WhatsApp",
        new_page: true,
        blocks: &[
            Block::Body(
                "Inquiries go straight to WhatsApp instead of an email database, so potential \
                 clients get an immediate conversation.",
            ),
            Block::SubHeading("10.1 How it Works"),
            Block::Body(
                "1. A visitor fills out the 'Start a Project' form on the homepage.\n\
                 2. The website takes their name and message.\n\
                 3. It builds a WhatsApp URL and opens WhatsApp with the message pre-filled.",
            ),
            Block::SubHeading("10.2 Configuration"),
            Block::Body(
                "To change the destination phone number, find the 'contact' object in the JSON \
                 editor and update 'whatsapp_url'.",
            ),
        ],
    },
];
