use phf::{phf_map, Map};

pub(crate) static GB: Map<u16, u16> = phf_map! {
    0x0f11u16 => 337, 0x0f13u16 => 199, 0x0f2au16 => 317, 0x0f36u16 => 342, 0x0f38u16 => 385,
    0x0f42u16 => 240, 0x0f4au16 => 249, 0x0f4bu16 => 248, 0x0f5bu16 => 180, 0x1002u16 => 389,
    0x1007u16 => 321, 0x1010u16 => 387, 0x1017u16 => 250, 0x101au16 => 486, 0x101du16 => 495,
    0x1037u16 => 404, 0x103eu16 => 433, 0x1042u16 => 236, 0x1049u16 => 213, 0x104fu16 => 422,
    0x1101u16 => 465, 0x111au16 => 597, 0x111bu16 => 270, 0x111cu16 => 295, 0x1124u16 => 312,
    0x1128u16 => 349, 0x112du16 => 172, 0x1142u16 => 193, 0x1148u16 => 204, 0x1200u16 => 336,
    0x1202u16 => 450, 0x1203u16 => 439, 0x1206u16 => 186, 0x1214u16 => 335, 0x1225u16 => 224,
    0x1228u16 => 537, 0x122bu16 => 460, 0x1235u16 => 273, 0x1255u16 => 571, 0x125cu16 => 228,
    0x1305u16 => 397, 0x130au16 => 298, 0x132au16 => 512, 0x132du16 => 447, 0x1332u16 => 501,
    0x1345u16 => 211, 0x134eu16 => 327, 0x1351u16 => 343, 0x1352u16 => 587, 0x1357u16 => 338,
    0x1359u16 => 468, 0x1404u16 => 346, 0x140au16 => 480, 0x1410u16 => 523, 0x1412u16 => 461,
    0x141bu16 => 377, 0x141cu16 => 580, 0x141fu16 => 572, 0x1422u16 => 565, 0x1423u16 => 600,
    0x142cu16 => 274, 0x1437u16 => 576, 0x1442u16 => 496, 0x1456u16 => 177, 0x1507u16 => 507,
    0x150au16 => 378, 0x1516u16 => 320, 0x151bu16 => 533, 0x152du16 => 289, 0x152eu16 => 260,
    0x1532u16 => 396, 0x1533u16 => 555, 0x153fu16 => 535, 0x1557u16 => 570, 0x1558u16 => 267,
    0x155du16 => 529, 0x1601u16 => 543, 0x1607u16 => 524, 0x161cu16 => 538, 0x1624u16 => 409,
    0x1626u16 => 263, 0x1635u16 => 513, 0x1646u16 => 345, 0x170du16 => 225, 0x1713u16 => 269,
    0x1722u16 => 167, 0x1723u16 => 354, 0x1728u16 => 406, 0x172fu16 => 238, 0x173eu16 => 491,
    0x174eu16 => 453, 0x1750u16 => 198, 0x1755u16 => 584, 0x1756u16 => 483, 0x1757u16 => 394,
    0x1758u16 => 418, 0x175bu16 => 347, 0x180au16 => 502, 0x1811u16 => 358, 0x1818u16 => 226,
    0x1837u16 => 484, 0x183au16 => 280, 0x183bu16 => 442, 0x1841u16 => 392, 0x1842u16 => 293,
    0x1845u16 => 384, 0x1859u16 => 578, 0x185au16 => 457, 0x185cu16 => 547, 0x1902u16 => 380,
    0x1922u16 => 520, 0x1924u16 => 219, 0x192cu16 => 577, 0x192du16 => 229, 0x193bu16 => 487,
    0x194bu16 => 171, 0x1951u16 => 210, 0x1952u16 => 557, 0x1a07u16 => 339, 0x1a09u16 => 315,
    0x1a0du16 => 215, 0x1a0fu16 => 307, 0x1a18u16 => 514, 0x1a37u16 => 402, 0x1a40u16 => 559,
    0x1a4du16 => 475, 0x1a4fu16 => 179, 0x1a58u16 => 435, 0x1a5cu16 => 325, 0x1b0au16 => 365,
    0x1b0eu16 => 300, 0x1b0fu16 => 443, 0x1b13u16 => 390, 0x1b15u16 => 430, 0x1b17u16 => 413,
    0x1b19u16 => 352, 0x1b1bu16 => 251, 0x1b22u16 => 370, 0x1b25u16 => 423, 0x1b26u16 => 291,
    0x1b29u16 => 265, 0x1b31u16 => 546, 0x1b3au16 => 165, 0x1b5au16 => 506, 0x1b5du16 => 440,
    0x1c0au16 => 515, 0x1c0cu16 => 203, 0x1c1au16 => 364, 0x1c26u16 => 420, 0x1c2bu16 => 341,
    0x1c2eu16 => 424, 0x1c2fu16 => 283, 0x1c32u16 => 425, 0x1c36u16 => 369, 0x1c39u16 => 308,
    0x1c46u16 => 287, 0x1c4fu16 => 373, 0x1c50u16 => 301, 0x1c57u16 => 517, 0x1c5bu16 => 257,
    0x1d08u16 => 185, 0x1d0au16 => 221, 0x1d0cu16 => 525, 0x1d1eu16 => 281, 0x1d24u16 => 412,
    0x1d2cu16 => 567, 0x1d35u16 => 174, 0x1d3cu16 => 398, 0x1d3eu16 => 331, 0x1d55u16 => 408,
    0x1d5bu16 => 530, 0x1e13u16 => 519, 0x1e25u16 => 311, 0x1e28u16 => 564, 0x1e2au16 => 230,
    0x1e34u16 => 304, 0x1e39u16 => 379, 0x1e4bu16 => 207, 0x1e52u16 => 256, 0x1e55u16 => 302,
    0x1f0cu16 => 286, 0x1f13u16 => 586, 0x1f2cu16 => 237, 0x1f2eu16 => 437, 0x1f3fu16 => 318,
    0x1f4au16 => 316, 0x1f4eu16 => 551, 0x1f59u16 => 232, 0x1f5cu16 => 334, 0x2001u16 => 469,
    0x2009u16 => 362, 0x200bu16 => 261, 0x201cu16 => 493, 0x202au16 => 596, 0x202eu16 => 456,
    0x202fu16 => 245, 0x2035u16 => 285, 0x204bu16 => 382, 0x2056u16 => 432, 0x2058u16 => 359,
    0x2116u16 => 431, 0x2128u16 => 284, 0x2129u16 => 218, 0x213au16 => 417, 0x214cu16 => 472,
    0x2159u16 => 176, 0x220au16 => 209, 0x2213u16 => 526, 0x221au16 => 503, 0x221eu16 => 470,
    0x221fu16 => 351, 0x2224u16 => 391, 0x2226u16 => 581, 0x2236u16 => 306, 0x2245u16 => 509,
    0x225au16 => 314, 0x2312u16 => 489, 0x231eu16 => 329, 0x2326u16 => 558, 0x232eu16 => 395,
    0x2330u16 => 258, 0x233bu16 => 556, 0x2342u16 => 563, 0x2349u16 => 562, 0x2408u16 => 415,
    0x2428u16 => 194, 0x250bu16 => 192, 0x2516u16 => 446, 0x2539u16 => 419, 0x253eu16 => 381,
    0x2543u16 => 552, 0x254fu16 => 522, 0x2556u16 => 376, 0x2606u16 => 255, 0x260fu16 => 510,
    0x261eu16 => 410, 0x262fu16 => 344, 0x2631u16 => 282, 0x2636u16 => 208, 0x263fu16 => 247,
    0x2644u16 => 353, 0x2652u16 => 438, 0x2657u16 => 411, 0x2700u16 => 399, 0x2704u16 => 549,
    0x2707u16 => 357, 0x2713u16 => 190, 0x2716u16 => 313, 0x2719u16 => 294, 0x271au16 => 540,
    0x2727u16 => 383, 0x272au16 => 595, 0x272du16 => 400, 0x272eu16 => 360, 0x2734u16 => 534,
    0x273cu16 => 268, 0x2746u16 => 541, 0x274au16 => 451, 0x275cu16 => 532, 0x280au16 => 393,
    0x281cu16 => 427, 0x282bu16 => 264, 0x282eu16 => 582, 0x2838u16 => 429, 0x2847u16 => 444,
    0x284cu16 => 494, 0x284du16 => 259, 0x2858u16 => 322, 0x2859u16 => 561, 0x2900u16 => 246,
    0x290du16 => 545, 0x290eu16 => 292, 0x2910u16 => 573, 0x2911u16 => 361, 0x2915u16 => 184,
    0x2916u16 => 239, 0x2918u16 => 497, 0x291bu16 => 191, 0x291cu16 => 445, 0x291du16 => 324,
    0x291fu16 => 498, 0x2921u16 => 553, 0x2926u16 => 598, 0x2929u16 => 183, 0x292fu16 => 231,
    0x2934u16 => 356, 0x2935u16 => 421, 0x293bu16 => 363, 0x2948u16 => 271, 0x2953u16 => 182,
    0x2954u16 => 366, 0x2a14u16 => 579, 0x2a18u16 => 488, 0x2a1bu16 => 367, 0x2a37u16 => 252,
    0x2a38u16 => 340, 0x2a40u16 => 233, 0x2a42u16 => 275, 0x2a58u16 => 550, 0x2a5au16 => 591,
    0x2a5cu16 => 485, 0x2b0au16 => 223, 0x2b37u16 => 441, 0x2b40u16 => 464, 0x2b41u16 => 462,
    0x2b4bu16 => 542, 0x2b59u16 => 166, 0x2b5cu16 => 168, 0x2c07u16 => 466, 0x2c0bu16 => 527,
    0x2c12u16 => 426, 0x2c16u16 => 436, 0x2c1bu16 => 428, 0x2c20u16 => 297, 0x2c24u16 => 235,
    0x2c49u16 => 319, 0x2c51u16 => 330, 0x2c54u16 => 200, 0x2c58u16 => 234, 0x2d09u16 => 589,
    0x2d0bu16 => 216, 0x2d0eu16 => 253, 0x2d1au16 => 452, 0x2d21u16 => 299, 0x2d23u16 => 449,
    0x2d29u16 => 473, 0x2d31u16 => 594, 0x2d3du16 => 528, 0x2d44u16 => 458, 0x2d50u16 => 332,
    0x2d56u16 => 407, 0x2e0fu16 => 244, 0x2e17u16 => 170, 0x2e21u16 => 566, 0x2e35u16 => 479,
    0x2e37u16 => 175, 0x2e4au16 => 467, 0x2e4bu16 => 243, 0x2e52u16 => 455, 0x2e5au16 => 227,
    0x2f00u16 => 531, 0x2f06u16 => 206, 0x2f08u16 => 478, 0x2f13u16 => 212, 0x2f21u16 => 492,
    0x2f23u16 => 511, 0x2f24u16 => 309, 0x2f2au16 => 490, 0x2f2cu16 => 202, 0x2f2fu16 => 548,
    0x2f47u16 => 290, 0x2f4au16 => 266, 0x2f4cu16 => 296, 0x3000u16 => 214, 0x3006u16 => 518,
    0x3018u16 => 375, 0x302eu16 => 164, 0x302fu16 => 288, 0x303au16 => 201, 0x3048u16 => 262,
    0x3057u16 => 197, 0x3058u16 => 477, 0x3109u16 => 569, 0x3111u16 => 575, 0x3114u16 => 482,
    0x311au16 => 599, 0x3130u16 => 500, 0x3133u16 => 585, 0x3136u16 => 196, 0x3141u16 => 476,
    0x3148u16 => 323, 0x3153u16 => 272, 0x315cu16 => 169, 0x320fu16 => 276, 0x3222u16 => 544,
    0x322cu16 => 368, 0x322fu16 => 592, 0x3235u16 => 508, 0x3239u16 => 568, 0x324au16 => 521,
    0x325cu16 => 187, 0x3309u16 => 303, 0x3310u16 => 454, 0x3311u16 => 181, 0x3319u16 => 205,
    0x331bu16 => 242, 0x331cu16 => 279, 0x332au16 => 416, 0x3338u16 => 350, 0x3339u16 => 593,
    0x334bu16 => 386, 0x3351u16 => 401, 0x3355u16 => 372, 0x3418u16 => 459, 0x341cu16 => 403,
    0x3424u16 => 310, 0x3434u16 => 173, 0x343eu16 => 536, 0x3441u16 => 590, 0x3445u16 => 333,
    0x3458u16 => 371, 0x345au16 => 305, 0x3503u16 => 355, 0x3506u16 => 241, 0x3509u16 => 499,
    0x350du16 => 588, 0x350eu16 => 278, 0x3510u16 => 463, 0x3514u16 => 220, 0x3517u16 => 414,
    0x351au16 => 505, 0x351du16 => 374, 0x3520u16 => 328, 0x3522u16 => 195, 0x352du16 => 388,
    0x352fu16 => 583, 0x3535u16 => 516, 0x3539u16 => 474, 0x353bu16 => 254, 0x3556u16 => 504,
    0x3600u16 => 178, 0x3607u16 => 189, 0x3609u16 => 348, 0x360fu16 => 277, 0x3613u16 => 188,
    0x361bu16 => 222, 0x3624u16 => 554, 0x3629u16 => 434, 0x3632u16 => 574, 0x3633u16 => 560,
    0x363bu16 => 448, 0x363eu16 => 326, 0x3644u16 => 217, 0x3648u16 => 471, 0x364du16 => 481,
    0x3655u16 => 405, 0x3656u16 => 539,
};
