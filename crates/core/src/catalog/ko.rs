use super::{
    ActivityPage, AnswerField, Block, Catalog, ChromeText, ExportText, Icon, IntroPage, Locale,
    QuestionLayout, QuestionPanel, ReportPage, Tone,
};

pub(super) const CATALOG: Catalog = Catalog {
    locale: Locale::Korean,
    chrome: ChromeText {
        title: "데이터 탐험가: 우리나라 인구변화의 비밀을 찾아라!",
        subtitle: "3개의 특별한 앱으로 떠나는 시간여행 탐험",
        name_label: "탐험대원 이름:",
        name_placeholder: "여기에 이름을 써주세요",
        previous: "이전",
        start: "탐험 시작!",
        next: "다음 단계로",
        write_report: "보고서 작성하기",
        intro_status: "소개",
        report_status: "최종 보고서",
        complete_title: "탐험 완료!",
        complete_message: "여러분의 빛나는 아이디어로 대한민국의 미래는 더욱 밝아질 거예요!",
        save_image: "보고서 이미지로 저장하기",
        render_failed: "탐험 안내서를 보여 줄 수 없어요",
    },
    intro: IntroPage {
        title: "탐험 시작!",
        body: "안녕하세요, 용감한 시간탐험대원! 우리는 오늘 3개의 특별한 데이터 앱을 통해 과거와 미래를 오가며 \
               우리나라 인구에 숨겨진 거대한 변화의 비밀을 파헤쳐 볼 거예요. 각 앱에서 단서를 찾고, \
               마지막에 미래 사회 보고서를 완성해 봅시다!",
    },
    activities: [
        ActivityPage {
            step: "1단계",
            title: "점점 귀해지는 아기 울음소리",
            description: "첫 번째 시간여행! 우리나라에서는 얼마나 많은 아기가 태어났을까요?",
            icon: Icon::Baby,
            embed_url: "https://birthrate2.netlify.app/",
            muted: false,
            layout: QuestionLayout::Columns,
            questions: &[
                QuestionPanel {
                    title: "관찰하기",
                    icon: Icon::Search,
                    tone: Tone::Blue,
                    body: &[
                        Block::Paragraph(
                            "1970년대에는 여성 한 명이 평생 낳을 것으로 예상되는 아기 수가 평균 4명이 넘었어요. \
                             그렇다면, 그래프의 가장 마지막에 있는 최근의 숫자는 얼마인가요?",
                        ),
                        Block::Field(
                            AnswerField::line("숫자를 입력하세요").labelled("정답: 약", Some("명")),
                        ),
                    ],
                },
                QuestionPanel {
                    title: "생각하기",
                    icon: Icon::Lightbulb,
                    tone: Tone::Purple,
                    body: &[
                        Block::Paragraph("그래프의 선이 계속 아래로 향하는 것은 우리 사회에 어떤 의미일까요?"),
                        Block::Field(AnswerField::lines(3, "여러분의 생각을 자유롭게 써보세요")),
                    ],
                },
            ],
        },
        ActivityPage {
            step: "2단계",
            title: "지혜로운 어르신들이 많아지는 마을",
            description: "두 번째 시간여행! 이번엔 우리 사회의 할머니, 할아버지 인구 변화를 살펴봅시다.",
            icon: Icon::Users,
            embed_url: "https://oldpeople1.netlify.app/",
            muted: true,
            layout: QuestionLayout::Columns,
            questions: &[
                QuestionPanel {
                    title: "관찰하기",
                    icon: Icon::Search,
                    tone: Tone::Blue,
                    body: &[
                        Block::Paragraph(
                            "그래프를 보니, 시간이 지날수록 노인 인구(65세 이상)의 비율은 어떻게 변하고 있나요?",
                        ),
                        Block::Field(AnswerField::line("변화 양상을 설명해보세요")),
                    ],
                },
                QuestionPanel {
                    title: "생각하기",
                    icon: Icon::Lightbulb,
                    tone: Tone::Purple,
                    body: &[
                        Block::Paragraph(
                            "미래에 노인 인구 비율이 매우 높아진 사회에서 우리는 무엇을 준비해야 할까요? \
                             여러분의 따뜻한 아이디어를 들려주세요.",
                        ),
                        Block::Field(AnswerField::lines(3, "미래 사회 준비 아이디어를 써보세요")),
                    ],
                },
            ],
        },
        ActivityPage {
            step: "3단계",
            title: "모양이 변하는 대한민국",
            description: "마지막 시간여행! 찾은 단서들을 합쳐 인구 구조 전체의 변화를 파악해 봅시다.",
            icon: Icon::ChartPie,
            embed_url: "https://population1.netlify.app/",
            muted: false,
            layout: QuestionLayout::Stacked,
            questions: &[
                QuestionPanel {
                    title: "비교하기",
                    icon: Icon::Scale,
                    tone: Tone::Blue,
                    body: &[
                        Block::Paragraph("슬라이더를 움직이며 1960년과 가장 미래 연도에 각각 놓고 비교해 보세요."),
                        Block::Note(
                            "1960년: 가장 큰 조각은 0-14세(어린이)와 15-64세(어른)였어요.",
                        ),
                        Block::Note("미래: 가장 큰 변화를 보이는 조각은?"),
                        Block::Field(
                            AnswerField::line("색깔")
                                .labelled("색깔:", Some("색"))
                                .compact(),
                        ),
                        Block::Field(AnswerField::line("예: 매우 커짐").labelled("크기 변화:", None)),
                    ],
                },
                QuestionPanel {
                    title: "종합하기",
                    icon: Icon::PuzzlePiece,
                    tone: Tone::Purple,
                    body: &[
                        Block::Paragraph(
                            "왜 이런 변화가 나타났을까요? 앞에서 찾은 두 개의 단서(출산율, 노인 인구)를 이용해 \
                             그 이유를 설명해 보세요.",
                        ),
                        Block::Field(AnswerField::lines(
                            4,
                            "1단계와 2단계에서 발견한 내용을 연결하여 설명해보세요",
                        )),
                    ],
                },
            ],
        },
    ],
    report: ReportPage {
        title: "시간탐험 보고서: 내가 그리는 미래 사회",
        lead: "모든 비밀을 파헤친 탐험대원, 정말 대단해요! 이제 탐험을 통해 알게 된 내용을 바탕으로 \
               여러분이 상상하는 미래 사회 보고서를 작성해 주세요.",
        name_label: "탐험대원:",
        name_placeholder: "이름을 입력해주세요",
        questions: &[
            QuestionPanel {
                title: "한 줄 요약",
                icon: Icon::Compress,
                tone: Tone::Orange,
                body: &[
                    Block::Paragraph("우리나라의 인구 변화에서 가장 중요한 특징은 무엇인가요?"),
                    Block::Field(AnswerField::line("한 줄로 요약해보세요")),
                ],
            },
            QuestionPanel {
                title: "미래 제안",
                icon: Icon::Rocket,
                tone: Tone::Red,
                body: &[
                    Block::Paragraph(
                        "이러한 인구 변화에 잘 대비하기 위해 우리 사회에 꼭 필요한 발명품이나 정책 아이디어가 \
                         있다면 자유롭게 글로 써보세요.",
                    ),
                    Block::Field(AnswerField::lines(
                        8,
                        "예: 어르신들을 위한 스마트 돌봄 로봇, 아이들을 위한 더 많은 놀이터 만들기 등 \
                         여러분의 아이디어를 자유롭게 적어주세요.",
                    )),
                ],
            },
            QuestionPanel {
                title: "탐험 소감",
                icon: Icon::Heart,
                tone: Tone::Green,
                body: &[
                    Block::Paragraph(
                        "오늘 인구변화 탐험을 통해 새롭게 알게 된 점이나 느낀 점을 자유롭게 써보세요.",
                    ),
                    Block::Field(AnswerField::lines(4, "탐험을 마친 소감을 들려주세요")),
                ],
            },
        ],
    },
    export: ExportText {
        unavailable: "이미지 저장 기능을 사용할 수 없습니다.",
        failed: "이미지 저장에 실패했습니다. 다시 시도해주세요.",
        file_stem: "인구탐험-보고서",
    },
};
