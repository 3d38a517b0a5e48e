use super::{
    ActivityPage, AnswerField, Block, Catalog, ChromeText, ExportText, Icon, IntroPage, Locale,
    QuestionLayout, QuestionPanel, ReportPage, Tone,
};

pub(super) const CATALOG: Catalog = Catalog {
    locale: Locale::English,
    chrome: ChromeText {
        title: "Data Explorers: Uncover the Secrets of Korea's Changing Population!",
        subtitle: "A time-travel expedition through three special apps",
        name_label: "Explorer name:",
        name_placeholder: "Write your name here",
        previous: "Back",
        start: "Start the Expedition!",
        next: "Next Step",
        write_report: "Write the Report",
        intro_status: "Introduction",
        report_status: "Final Report",
        complete_title: "Expedition Complete!",
        complete_message: "Your brilliant ideas will make Korea's future even brighter!",
        save_image: "Save Report as Image",
        render_failed: "The expedition guide could not be shown",
    },
    intro: IntroPage {
        title: "Start the Expedition!",
        body: "Hello, brave time explorer! Today we will travel between the past and the future \
               with three special data apps and uncover the secret of the huge change hidden in \
               our country's population. Look for clues in each app, then finish a report about \
               the society of the future!",
    },
    activities: [
        ActivityPage {
            step: "Step 1",
            title: "The Rare Sound of a Baby's Cry",
            description: "Our first trip through time! How many babies have been born in Korea?",
            icon: Icon::Baby,
            embed_url: "https://birthrate2.netlify.app/",
            muted: false,
            layout: QuestionLayout::Columns,
            questions: &[
                QuestionPanel {
                    title: "Observe",
                    icon: Icon::Search,
                    tone: Tone::Blue,
                    body: &[
                        Block::Paragraph(
                            "In the 1970s a woman was expected to have more than 4 babies on average. \
                             What is the most recent number at the very end of the graph?",
                        ),
                        Block::Field(
                            AnswerField::line("Enter a number").labelled("Answer: about", Some("babies")),
                        ),
                    ],
                },
                QuestionPanel {
                    title: "Think",
                    icon: Icon::Lightbulb,
                    tone: Tone::Purple,
                    body: &[
                        Block::Paragraph(
                            "What does it mean for our society that the line of the graph keeps going down?",
                        ),
                        Block::Field(AnswerField::lines(3, "Write down your thoughts freely")),
                    ],
                },
            ],
        },
        ActivityPage {
            step: "Step 2",
            title: "A Village with More Wise Elders",
            description: "Our second trip through time! Let's look at how the number of grandparents changes.",
            icon: Icon::Users,
            embed_url: "https://oldpeople1.netlify.app/",
            muted: true,
            layout: QuestionLayout::Columns,
            questions: &[
                QuestionPanel {
                    title: "Observe",
                    icon: Icon::Search,
                    tone: Tone::Blue,
                    body: &[
                        Block::Paragraph(
                            "Looking at the graph, how does the share of older people (65 and over) change over time?",
                        ),
                        Block::Field(AnswerField::line("Describe the change")),
                    ],
                },
                QuestionPanel {
                    title: "Think",
                    icon: Icon::Lightbulb,
                    tone: Tone::Purple,
                    body: &[
                        Block::Paragraph(
                            "In a future where many more people are older, what should we prepare? \
                             Share your kind ideas.",
                        ),
                        Block::Field(AnswerField::lines(3, "Write your ideas for the future")),
                    ],
                },
            ],
        },
        ActivityPage {
            step: "Step 3",
            title: "Korea Changes Shape",
            description: "Our last trip through time! Put your clues together to see how the whole population structure changes.",
            icon: Icon::ChartPie,
            embed_url: "https://population1.netlify.app/",
            muted: false,
            layout: QuestionLayout::Stacked,
            questions: &[
                QuestionPanel {
                    title: "Compare",
                    icon: Icon::Scale,
                    tone: Tone::Blue,
                    body: &[
                        Block::Paragraph(
                            "Move the slider to 1960 and then to the furthest future year and compare them.",
                        ),
                        Block::Note(
                            "1960: the biggest slices were ages 0-14 (children) and 15-64 (adults).",
                        ),
                        Block::Note("Future: which slice changes the most?"),
                        Block::Field(
                            AnswerField::line("Colour")
                                .labelled("Colour:", None)
                                .compact(),
                        ),
                        Block::Field(
                            AnswerField::line("e.g. much bigger").labelled("Change in size:", None),
                        ),
                    ],
                },
                QuestionPanel {
                    title: "Put It Together",
                    icon: Icon::PuzzlePiece,
                    tone: Tone::Purple,
                    body: &[
                        Block::Paragraph(
                            "Why did this change happen? Use the two clues you found earlier \
                             (birth rate and older population) to explain the reason.",
                        ),
                        Block::Field(AnswerField::lines(
                            4,
                            "Connect what you found in steps 1 and 2",
                        )),
                    ],
                },
            ],
        },
    ],
    report: ReportPage {
        title: "Time Travel Report: The Future I Imagine",
        lead: "Amazing work, explorer, you uncovered every secret! Now use what you learned on the \
               expedition to write a report about the society you imagine in the future.",
        name_label: "Explorer:",
        name_placeholder: "Please enter your name",
        questions: &[
            QuestionPanel {
                title: "One-Line Summary",
                icon: Icon::Compress,
                tone: Tone::Orange,
                body: &[
                    Block::Paragraph("What is the most important feature of how our population is changing?"),
                    Block::Field(AnswerField::line("Sum it up in one line")),
                ],
            },
            QuestionPanel {
                title: "Ideas for the Future",
                icon: Icon::Rocket,
                tone: Tone::Red,
                body: &[
                    Block::Paragraph(
                        "If you have an invention or a policy idea that would help our society \
                         prepare for these changes, write it down freely.",
                    ),
                    Block::Field(AnswerField::lines(
                        8,
                        "e.g. smart care robots for older people, more playgrounds for children. \
                         Write down any ideas you have.",
                    )),
                ],
            },
            QuestionPanel {
                title: "Reflection",
                icon: Icon::Heart,
                tone: Tone::Green,
                body: &[
                    Block::Paragraph(
                        "What did you learn or feel during today's population expedition?",
                    ),
                    Block::Field(AnswerField::lines(4, "Tell us how the expedition went")),
                ],
            },
        ],
    },
    export: ExportText {
        unavailable: "Saving as an image is not available.",
        failed: "Saving the image failed. Please try again.",
        file_stem: "population-expedition-report",
    },
};
