// Stroke counts for common surname and given-name kanji (shinjitai forms).
pub(crate) const KNOWN_STROKES: &[(char, u32)] = &[
    // numerals
    ('一', 1), ('二', 2), ('三', 3), ('四', 5), ('五', 4),
    ('六', 4), ('七', 2), ('八', 2), ('九', 2), ('十', 2), ('千', 3),
    // surnames
    ('佐', 7), ('藤', 18), ('鈴', 13), ('木', 4), ('高', 10),
    ('橋', 16), ('田', 5), ('中', 4), ('伊', 6), ('渡', 12),
    ('辺', 5), ('山', 3), ('本', 5), ('小', 3), ('林', 8),
    ('加', 5), ('吉', 6), ('松', 8), ('井', 4), ('清', 11),
    ('斎', 11), ('斉', 8), ('森', 12), ('池', 6), ('阿', 8),
    ('部', 11), ('石', 5), ('前', 9), ('後', 9), ('長', 8),
    ('坂', 7), ('岡', 8), ('村', 7), ('近', 7), ('遠', 13),
    ('青', 8), ('野', 11), ('川', 3), ('西', 6), ('東', 8),
    ('原', 10), ('上', 3), ('下', 3), ('大', 3), ('宮', 10),
    ('内', 4), ('谷', 7), ('島', 10), ('金', 8), ('平', 5),
    ('竹', 6), ('福', 13), ('浜', 10), ('菊', 11), ('関', 14),
    ('新', 13), ('荒', 9), ('横', 15), ('工', 3), ('杉', 7),
    ('今', 4), ('増', 14), ('丸', 3), ('菅', 11), ('市', 5),
    ('水', 4), ('尾', 7), ('須', 12), ('土', 3), ('古', 5),
    ('熊', 14), ('北', 5), ('南', 9), ('久', 3), ('保', 9),
    ('口', 3), ('沢', 7), ('矢', 5), ('門', 8), ('河', 8),
    ('崎', 11), ('場', 12), ('柴', 10), ('酒', 10), ('宇', 6),
    // given names
    ('太', 4), ('郎', 9), ('子', 3), ('美', 9), ('花', 7),
    ('愛', 13), ('恵', 10), ('真', 10), ('優', 17), ('翔', 12),
    ('健', 11), ('拓', 8), ('也', 3), ('人', 2), ('明', 8),
    ('光', 6), ('正', 5), ('生', 5), ('直', 8), ('春', 9),
    ('夏', 10), ('秋', 9), ('冬', 5), ('雪', 11), ('陽', 12),
    ('菜', 11), ('結', 12), ('奈', 8), ('香', 9), ('彩', 11),
    ('桜', 10), ('葵', 12), ('蓮', 13), ('悠', 11), ('輝', 15),
    ('海', 9), ('空', 8), ('心', 4), ('実', 8), ('希', 7),
    ('由', 5), ('里', 7), ('沙', 7), ('智', 12), ('亮', 9),
    ('介', 4), ('助', 7), ('朗', 10), ('次', 6), ('雄', 12),
    ('男', 7), ('夫', 4), ('彦', 9), ('之', 3), ('司', 5),
    ('博', 12), ('隆', 11), ('誠', 13), ('剛', 10), ('学', 8),
    ('聡', 14), ('裕', 12), ('友', 4), ('幸', 8), ('信', 9),
    ('義', 13), ('勇', 9), ('達', 12), ('哲', 10), ('修', 10),
    ('浩', 10), ('康', 11), ('英', 8), ('秀', 7), ('和', 8),
    ('弘', 5), ('文', 4), ('武', 8), ('安', 6), ('永', 5),
];
